//! SEP metadata parsing and validation.
//!
//! # Responsibility
//! - Turn one raw SEP text stream into a validated [`Sep`] record.
//! - Report precise, recoverable errors naming the offending field and value.
//!
//! # Invariants
//! - Construction is atomic: either every required field validates or no
//!   record is produced.
//! - No cross-record checks happen here; uniqueness and filename consistency
//!   belong to the caller.

mod author;
mod header;

use crate::model::sep::{Sep, SepStatus, SepType};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::BufRead;

pub type ParseResult<T> = Result<T, ParseError>;

// Header fields that must be present and non-empty.
const FIELD_NUMBER: &str = "SEP";
const FIELD_TITLE: &str = "Title";
const FIELD_TYPE: &str = "Type";
const FIELD_STATUS: &str = "Status";
const FIELD_AUTHOR: &str = "Author";

/// Parse failure for one input stream.
///
/// Carries the source identifier the caller supplied (usually a filename) and
/// the record number when it was already known at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source_id: String,
    pub number: Option<u32>,
}

/// What went wrong with a single field or line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Io(String),
    MalformedHeaderLine(String),
    MissingField(&'static str),
    EmptyField(&'static str),
    InvalidNumber(String),
    UnknownType(String),
    UnknownStatus(String),
    MalformedAuthor(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "SEP {number} ({}): {}", self.source_id, self.kind),
            None => write!(f, "SEP ? ({}): {}", self.source_id, self.kind),
        }
    }
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(message) => write!(f, "read failure: {message}"),
            Self::MalformedHeaderLine(line) => write!(f, "malformed header line `{line}`"),
            Self::MissingField(name) => write!(f, "missing required header field `{name}`"),
            Self::EmptyField(name) => write!(f, "header field `{name}` must not be empty"),
            Self::InvalidNumber(value) => {
                write!(f, "SEP number `{value}` is not a non-negative integer")
            }
            Self::UnknownType(value) => write!(f, "unrecognized SEP type `{value}`"),
            Self::UnknownStatus(value) => write!(f, "unrecognized SEP status `{value}`"),
            Self::MalformedAuthor(entry) => write!(f, "malformed author entry `{entry}`"),
        }
    }
}

impl Error for ParseError {}

/// Parses one SEP document stream into a validated record.
///
/// `source` identifies the stream in errors (usually the filename). Only the
/// header block is consumed; the body is left unread.
pub fn parse_sep<R: BufRead>(mut reader: R, source: &str) -> ParseResult<Sep> {
    let fail = |kind: ParseErrorKind, number: Option<u32>| ParseError {
        kind,
        source_id: source.to_string(),
        number,
    };

    let headers = header::read_header(&mut reader).map_err(|kind| fail(kind, None))?;

    let raw_number =
        required_field(&headers, FIELD_NUMBER).map_err(|kind| fail(kind, None))?;
    let number: u32 = raw_number
        .parse()
        .map_err(|_| fail(ParseErrorKind::InvalidNumber(raw_number.to_string()), None))?;

    // From here on every failure can name the record.
    let fail_at = |kind: ParseErrorKind| fail(kind, Some(number));

    let title = required_field(&headers, FIELD_TITLE)
        .map_err(fail_at)?
        .to_string();

    let raw_kind = required_field(&headers, FIELD_TYPE).map_err(fail_at)?;
    let kind = SepType::parse(raw_kind)
        .ok_or_else(|| fail_at(ParseErrorKind::UnknownType(raw_kind.to_string())))?;

    let raw_status = required_field(&headers, FIELD_STATUS).map_err(fail_at)?;
    let status = SepStatus::parse(raw_status)
        .ok_or_else(|| fail_at(ParseErrorKind::UnknownStatus(raw_status.to_string())))?;

    let raw_authors = required_field(&headers, FIELD_AUTHOR).map_err(fail_at)?;
    let authors = author::parse_author_list(raw_authors).map_err(fail_at)?;

    Ok(Sep {
        number,
        title,
        kind,
        status,
        authors,
        headers,
    })
}

/// Looks up a required field case-insensitively; first occurrence wins.
fn required_field<'h>(
    headers: &'h [(String, String)],
    name: &'static str,
) -> Result<&'h str, ParseErrorKind> {
    let value = headers
        .iter()
        .find(|(field, _)| field.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
        .ok_or(ParseErrorKind::MissingField(name))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ParseErrorKind::EmptyField(name));
    }
    Ok(value)
}
