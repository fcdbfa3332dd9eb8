//! Author contact aggregation.
//!
//! # Responsibility
//! - Resolve exactly one email per author identity across the record set.
//! - Collect every conflicting identity before failing, not just the first.
//!
//! # Invariants
//! - An empty email is only ever the resolved value when no non-empty email
//!   exists for that identity.
//! - The conflict set is independent of record order.

use crate::model::sep::Sep;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One author identity with its resolved contact email.
///
/// `email` is empty when no record supplied one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAuthor {
    pub last_first: String,
    pub email: String,
}

/// One identity credited with more than one distinct non-empty email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorConflict {
    pub last_first: String,
    pub emails: Vec<String>,
}

/// Aggregation failure enumerating every conflicting identity at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorConflictError {
    pub conflicts: Vec<AuthorConflict>,
}

impl Display for AuthorConflictError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "some authors have more than one email address listed:")?;
        for conflict in &self.conflicts {
            writeln!(
                f,
                "    {}: {}",
                conflict.last_first,
                conflict.emails.join(", ")
            )?;
        }
        Ok(())
    }
}

impl Error for AuthorConflictError {}

/// Resolves one email per identity, sorted by the normalized name key.
///
/// Walks records in order and each record's author list in declaration
/// order, accumulating the distinct non-empty emails seen per identity.
pub fn resolve_authors(seps: &[Sep]) -> Result<Vec<ResolvedAuthor>, AuthorConflictError> {
    // Keyed by the identity key, so iteration is already in final sort order.
    let mut seen: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for sep in seps {
        for author in &sep.authors {
            let emails = seen.entry(author.last_first.clone()).or_default();
            if let Some(email) = &author.email {
                if !emails.contains(email) {
                    emails.push(email.clone());
                }
            }
        }
    }

    let mut conflicts = Vec::new();
    let mut resolved = Vec::new();
    for (last_first, emails) in seen {
        match emails.len() {
            0 => resolved.push(ResolvedAuthor {
                last_first,
                email: String::new(),
            }),
            1 => resolved.push(ResolvedAuthor {
                last_first,
                email: emails.into_iter().next().unwrap_or_default(),
            }),
            _ => conflicts.push(AuthorConflict { last_first, emails }),
        }
    }

    if !conflicts.is_empty() {
        return Err(AuthorConflictError { conflicts });
    }
    Ok(resolved)
}
