//! Index document rendering.
//!
//! # Responsibility
//! - Emit the complete index document, section by section, to one stream.
//!
//! # Invariants
//! - Classification and author aggregation run to completion before the
//!   first byte is written; a failing run emits nothing.
//! - Output is deterministic for a given record set and date.

mod constants;
mod table;

pub use constants::{AUTHOR_WIDTH, RESERVED, TITLE_WIDTH};

use crate::index::authors::{resolve_authors, AuthorConflictError, ResolvedAuthor};
use crate::index::classify::{group_by_category, CategoryBuckets, ClassificationError};
use crate::model::sep::{Sep, SepStatus, SepType};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

pub type RenderResult<T> = Result<T, RenderError>;

/// Rendering failure: a derivation error surfaced before output began, or
/// the output stream itself failed.
#[derive(Debug)]
pub enum RenderError {
    Classification(ClassificationError),
    AuthorConflict(AuthorConflictError),
    Io(io::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classification(err) => write!(f, "{err}"),
            Self::AuthorConflict(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write index: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Classification(err) => Some(err),
            Self::AuthorConflict(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ClassificationError> for RenderError {
    fn from(value: ClassificationError) -> Self {
        Self::Classification(value)
    }
}

impl From<AuthorConflictError> for RenderError {
    fn from(value: AuthorConflictError) -> Self {
        Self::AuthorConflict(value)
    }
}

impl From<io::Error> for RenderError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Category subsections in display order: title and anchor for each bucket.
const CATEGORY_SECTIONS: &[(&str, &str)] = &[
    ("Meta-SEPs (SEPs about SEPs or Processes)", "by-category-meta"),
    ("Other Informational SEPs", "by-category-other-info"),
    (
        "Provisional SEPs (provisionally accepted; interface may still change)",
        "by-category-provisional",
    ),
    (
        "Accepted SEPs (accepted; may not be implemented yet)",
        "by-category-accepted",
    ),
    ("Open SEPs (under consideration)", "by-category-open"),
    (
        "Finished SEPs (done, with a stable interface)",
        "by-category-finished",
    ),
    (
        "Historical Meta-SEPs and Informational SEPs",
        "by-category-historical",
    ),
    (
        "Deferred SEPs (postponed pending further research or updates)",
        "by-category-deferred",
    ),
    (
        "Abandoned, Withdrawn, and Rejected SEPs",
        "by-category-abandoned",
    ),
];

/// Renders the complete index document for a number-sorted record set.
///
/// `generated_on` becomes the `Last-Modified` stamp in the preamble.
pub fn write_index<W: Write>(
    seps: &[Sep],
    out: &mut W,
    generated_on: NaiveDate,
) -> RenderResult<()> {
    // Derive everything fallible up front so failure never emits output.
    let buckets = group_by_category(seps)?;
    let authors = resolve_authors(seps)?;

    let date = generated_on.format("%Y-%m-%d").to_string();
    writeln!(out, "{}", constants::preamble(&date))?;
    writeln!(out)?;
    writeln!(out)?;

    emit_title(out, "Introduction", "intro")?;
    writeln!(out, "{}", constants::INTRO)?;
    writeln!(out)?;
    writeln!(out)?;

    emit_title(out, "Index by Category", "by-category")?;
    for ((title, anchor), bucket) in CATEGORY_SECTIONS.iter().zip(buckets_in_order(&buckets)) {
        emit_category(out, title, anchor, bucket)?;
    }
    writeln!(out)?;

    emit_title(out, "Numerical Index", "by-sep-number")?;
    emit_column_headers(out)?;
    let mut prev_number = 0;
    for sep in seps {
        // Visual gap wherever numbers are missing or reserved.
        if sep.number > prev_number + 1 {
            writeln!(out)?;
        }
        writeln!(out, "{}", table::sep_row(sep))?;
        prev_number = sep.number;
    }
    writeln!(out, "{}", *table::TABLE_RULE)?;
    writeln!(out)?;

    emit_title(out, "Reserved SEP Numbers", "reserved")?;
    emit_column_headers(out)?;
    let mut reserved = constants::RESERVED.to_vec();
    reserved.sort_unstable();
    for (number, claimants) in reserved {
        writeln!(
            out,
            "{}",
            table::format_row(".", ".", &number.to_string(), "RESERVED", claimants)
        )?;
    }
    writeln!(out, "{}", *table::TABLE_RULE)?;
    writeln!(out)?;

    emit_title(out, "SEP Types Key", "type-key")?;
    for kind in SepType::ALL {
        writeln!(out, "    {} - {} SEP", kind.code(), kind.as_str())?;
        writeln!(out)?;
    }
    writeln!(out)?;

    emit_title(out, "SEP Status Key", "status-key")?;
    for status in SepStatus::ALL {
        // Draft rows carry no status letter; Active shares A with Accepted.
        if matches!(status, SepStatus::Active | SepStatus::Draft) {
            continue;
        }
        if status == SepStatus::Accepted {
            writeln!(out, "    A - Accepted (Standards Track only) or Active proposal")?;
        } else if let Some(code) = status.code() {
            writeln!(out, "    {code} - {} proposal", status.as_str())?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    emit_title(out, "Authors/Owners", "authors")?;
    emit_author_table(out, &authors)?;
    writeln!(out)?;
    writeln!(out)?;

    emit_title(out, "References", "references")?;
    writeln!(out, "{}", constants::REFERENCES)?;
    writeln!(out)?;
    writeln!(out, "{}", constants::FOOTER)?;

    Ok(())
}

/// Buckets in the fixed display order matching [`CATEGORY_SECTIONS`].
fn buckets_in_order<'b, 'a>(buckets: &'b CategoryBuckets<'a>) -> [&'b [&'a Sep]; 9] {
    [
        &buckets.meta,
        &buckets.other_informational,
        &buckets.provisional,
        &buckets.accepted,
        &buckets.open,
        &buckets.finished,
        &buckets.historical,
        &buckets.deferred,
        &buckets.abandoned,
    ]
}

fn emit_heading<W: Write>(
    out: &mut W,
    text: &str,
    anchor: &str,
    underline: &str,
) -> io::Result<()> {
    writeln!(out, ".. _{anchor}:")?;
    writeln!(out)?;
    writeln!(out, "{text}")?;
    writeln!(out, "{}", underline.repeat(text.chars().count()))?;
    writeln!(out)
}

fn emit_title<W: Write>(out: &mut W, text: &str, anchor: &str) -> io::Result<()> {
    emit_heading(out, text, anchor, "=")
}

fn emit_subtitle<W: Write>(out: &mut W, text: &str, anchor: &str) -> io::Result<()> {
    emit_heading(out, text, anchor, "-")
}

fn emit_column_headers<W: Write>(out: &mut W) -> io::Result<()> {
    for line in table::column_headers() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// One category subsection: heading, table with every record, closing rule.
/// Empty categories still render their table frame.
fn emit_category<W: Write>(
    out: &mut W,
    title: &str,
    anchor: &str,
    seps: &[&Sep],
) -> io::Result<()> {
    emit_subtitle(out, title, anchor)?;
    emit_column_headers(out)?;
    for sep in seps {
        writeln!(out, "{}", table::sep_row(sep))?;
    }
    writeln!(out, "{}", *table::TABLE_RULE)?;
    writeln!(out)
}

/// Author table, name column sized by the widest normalized name.
///
/// Names are stored NFC-normalized, so character counts line up even when
/// the declared spelling used combining characters.
fn emit_author_table<W: Write>(out: &mut W, authors: &[ResolvedAuthor]) -> io::Result<()> {
    let name_width = authors
        .iter()
        .map(|author| author.last_first.chars().count())
        .max()
        .unwrap_or(0);
    let rule = format!(
        "{}  {}",
        "=".repeat(name_width),
        "=".repeat("email address".len())
    );

    writeln!(out, "{rule}")?;
    writeln!(out, "{:<name_width$}  Email Address", "Name")?;
    writeln!(out, "{rule}")?;
    for author in authors {
        writeln!(out, "{:<name_width$}  {}", author.last_first, author.email)?;
    }
    writeln!(out, "{rule}")
}
