//! SEP record model.
//!
//! # Responsibility
//! - Define the validated metadata record for one SEP document.
//! - Map type/status header values to closed enumerations and table codes.
//!
//! # Invariants
//! - `kind` and `status` only ever hold values from the declared vocabularies.
//! - `headers` retains every header field verbatim, in file order.

use crate::model::author::Author;
use serde::{Deserialize, Serialize};

/// Document type declared in the `Type` header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SepType {
    Informational,
    Process,
    StandardsTrack,
}

impl SepType {
    /// All recognized types, in alphabetical display-name order.
    pub const ALL: [SepType; 3] = [
        SepType::Informational,
        SepType::Process,
        SepType::StandardsTrack,
    ];

    /// Display name as written in SEP headers.
    pub fn as_str(self) -> &'static str {
        match self {
            SepType::Informational => "Informational",
            SepType::Process => "Process",
            SepType::StandardsTrack => "Standards Track",
        }
    }

    /// Exact-match parse of a `Type` header value.
    pub fn parse(value: &str) -> Option<SepType> {
        match value {
            "Informational" => Some(SepType::Informational),
            "Process" => Some(SepType::Process),
            "Standards Track" => Some(SepType::StandardsTrack),
            _ => None,
        }
    }

    /// One-letter code shown in index tables.
    pub fn code(self) -> char {
        match self {
            SepType::Informational => 'I',
            SepType::Process => 'P',
            SepType::StandardsTrack => 'S',
        }
    }
}

/// Lifecycle status declared in the `Status` header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SepStatus {
    Accepted,
    Active,
    Deferred,
    Draft,
    Final,
    Incomplete,
    Provisional,
    Rejected,
    Superseded,
    Withdrawn,
}

impl SepStatus {
    /// All recognized statuses, in alphabetical display-name order.
    pub const ALL: [SepStatus; 10] = [
        SepStatus::Accepted,
        SepStatus::Active,
        SepStatus::Deferred,
        SepStatus::Draft,
        SepStatus::Final,
        SepStatus::Incomplete,
        SepStatus::Provisional,
        SepStatus::Rejected,
        SepStatus::Superseded,
        SepStatus::Withdrawn,
    ];

    /// Display name as written in SEP headers.
    pub fn as_str(self) -> &'static str {
        match self {
            SepStatus::Accepted => "Accepted",
            SepStatus::Active => "Active",
            SepStatus::Deferred => "Deferred",
            SepStatus::Draft => "Draft",
            SepStatus::Final => "Final",
            SepStatus::Incomplete => "Incomplete",
            SepStatus::Provisional => "Provisional",
            SepStatus::Rejected => "Rejected",
            SepStatus::Superseded => "Superseded",
            SepStatus::Withdrawn => "Withdrawn",
        }
    }

    /// Exact-match parse of a `Status` header value.
    pub fn parse(value: &str) -> Option<SepStatus> {
        match value {
            "Accepted" => Some(SepStatus::Accepted),
            "Active" => Some(SepStatus::Active),
            "Deferred" => Some(SepStatus::Deferred),
            "Draft" => Some(SepStatus::Draft),
            "Final" => Some(SepStatus::Final),
            "Incomplete" => Some(SepStatus::Incomplete),
            "Provisional" => Some(SepStatus::Provisional),
            "Rejected" => Some(SepStatus::Rejected),
            "Superseded" => Some(SepStatus::Superseded),
            "Withdrawn" => Some(SepStatus::Withdrawn),
            _ => None,
        }
    }

    /// One-letter code shown in index tables.
    ///
    /// Draft and Active rows carry no code; Active shares the `A` letter with
    /// Accepted in the status key instead.
    pub fn code(self) -> Option<char> {
        match self {
            SepStatus::Draft | SepStatus::Active => None,
            SepStatus::Accepted => Some('A'),
            SepStatus::Deferred => Some('D'),
            SepStatus::Final => Some('F'),
            SepStatus::Incomplete => Some('I'),
            SepStatus::Provisional => Some('P'),
            SepStatus::Rejected => Some('R'),
            SepStatus::Superseded => Some('S'),
            SepStatus::Withdrawn => Some('W'),
        }
    }
}

/// One SEP document's validated metadata.
///
/// Constructed only by the parser; construction either fully succeeds or
/// fails, so no partially-populated record exists downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sep {
    /// Number assigned by the SEP editors. Unique across the collection.
    pub number: u32,
    /// Non-empty document title.
    pub title: String,
    /// Serialized as `type` to match the header field naming.
    #[serde(rename = "type")]
    pub kind: SepType,
    pub status: SepStatus,
    /// Credited authors in declaration order.
    pub authors: Vec<Author>,
    /// Every header field as parsed, in file order, values verbatim.
    ///
    /// Covers `Created`, `Content-Type` and any unknown fields, which are
    /// retained but never interpreted.
    pub headers: Vec<(String, String)>,
}
