//! Author header field parsing.
//!
//! # Responsibility
//! - Split the `Author` field into entries and build [`Author`] values.
//!
//! # Invariants
//! - Each entry is `Name <email>` or a bare name; anything else is malformed
//!   and the raw entry text travels with the error.

use crate::model::author::Author;
use crate::parse::ParseErrorKind;
use once_cell::sync::Lazy;
use regex::Regex;

static ANGLED_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>[^<>]+?)\s*<(?P<email>[^<>]+)>$").expect("author entry pattern")
});

/// Parses the comma-delimited author list.
///
/// Entry order is preserved; it is semantically meaningful for display.
pub(crate) fn parse_author_list(raw: &str) -> Result<Vec<Author>, ParseErrorKind> {
    let mut authors = Vec::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(ParseErrorKind::MalformedAuthor(raw.trim().to_string()));
        }

        if entry.contains('<') || entry.contains('>') {
            let captures = ANGLED_ENTRY
                .captures(entry)
                .ok_or_else(|| ParseErrorKind::MalformedAuthor(entry.to_string()))?;
            authors.push(Author::new(&captures["name"], Some(&captures["email"])));
        } else {
            authors.push(Author::new(entry, None));
        }
    }

    Ok(authors)
}
