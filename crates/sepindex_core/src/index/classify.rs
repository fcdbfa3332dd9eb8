//! Category assignment rules.
//!
//! # Responsibility
//! - Map each record's (type, status) pair to one of nine index categories.
//!
//! # Invariants
//! - Rules are evaluated top to bottom; the first match wins and later rules
//!   are unreachable for it.
//! - A record matching no rule is a data-integrity error, fatal for the run.

use crate::model::sep::{Sep, SepStatus, SepType};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The nine mutually exclusive index buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Meta,
    OtherInformational,
    Provisional,
    Accepted,
    Open,
    Finished,
    Historical,
    Deferred,
    Abandoned,
}

/// A record whose (type, status) pair matched no rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationError {
    pub number: u32,
    pub kind: SepType,
    pub status: SepStatus,
}

impl Display for ClassificationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SEP {} has no index category ({}/{})",
            self.number,
            self.kind.as_str(),
            self.status.as_str()
        )
    }
}

impl Error for ClassificationError {}

/// Ordered rule table. Key statuses take precedence over the type, and vice
/// versa further down; nested sub-cases are flattened in evaluation order.
static RULES: [(fn(&Sep) -> bool, Category); 11] = [
    (|sep| sep.status == SepStatus::Draft, Category::Open),
    (|sep| sep.status == SepStatus::Deferred, Category::Deferred),
    (
        |sep| sep.kind == SepType::Process && sep.status == SepStatus::Active,
        Category::Meta,
    ),
    (
        |sep| {
            sep.kind == SepType::Process
                && matches!(sep.status, SepStatus::Withdrawn | SepStatus::Rejected)
        },
        Category::Abandoned,
    ),
    (|sep| sep.kind == SepType::Process, Category::Historical),
    (
        |sep| {
            matches!(
                sep.status,
                SepStatus::Rejected
                    | SepStatus::Withdrawn
                    | SepStatus::Incomplete
                    | SepStatus::Superseded
            )
        },
        Category::Abandoned,
    ),
    // Final informational SEPs are only historical when they are release
    // schedules; the title substring is the deciding signal.
    (
        |sep| {
            sep.kind == SepType::Informational
                && (sep.status == SepStatus::Active || !sep.title.contains("Release Schedule"))
        },
        Category::OtherInformational,
    ),
    (|sep| sep.kind == SepType::Informational, Category::Historical),
    (
        |sep| sep.status == SepStatus::Provisional,
        Category::Provisional,
    ),
    (
        |sep| matches!(sep.status, SepStatus::Accepted | SepStatus::Active),
        Category::Accepted,
    ),
    (|sep| sep.status == SepStatus::Final, Category::Finished),
];

/// Assigns the record's category, first matching rule wins.
pub fn classify(sep: &Sep) -> Result<Category, ClassificationError> {
    for (matches_rule, category) in RULES.iter() {
        if matches_rule(sep) {
            return Ok(*category);
        }
    }
    Err(ClassificationError {
        number: sep.number,
        kind: sep.kind,
        status: sep.status,
    })
}

/// Records partitioned by category, input order preserved inside each bucket.
///
/// The caller hands in a number-sorted slice, so buckets come out in
/// ascending-number order as a side effect.
#[derive(Debug, Default)]
pub struct CategoryBuckets<'a> {
    pub meta: Vec<&'a Sep>,
    pub other_informational: Vec<&'a Sep>,
    pub provisional: Vec<&'a Sep>,
    pub accepted: Vec<&'a Sep>,
    pub open: Vec<&'a Sep>,
    pub finished: Vec<&'a Sep>,
    pub historical: Vec<&'a Sep>,
    pub deferred: Vec<&'a Sep>,
    pub abandoned: Vec<&'a Sep>,
}

/// Partitions the record set, failing on the first unclassifiable record.
pub fn group_by_category(seps: &[Sep]) -> Result<CategoryBuckets<'_>, ClassificationError> {
    let mut buckets = CategoryBuckets::default();
    for sep in seps {
        let bucket = match classify(sep)? {
            Category::Meta => &mut buckets.meta,
            Category::OtherInformational => &mut buckets.other_informational,
            Category::Provisional => &mut buckets.provisional,
            Category::Accepted => &mut buckets.accepted,
            Category::Open => &mut buckets.open,
            Category::Finished => &mut buckets.finished,
            Category::Historical => &mut buckets.historical,
            Category::Deferred => &mut buckets.deferred,
            Category::Abandoned => &mut buckets.abandoned,
        };
        bucket.push(sep);
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::{classify, group_by_category, Category};
    use crate::model::author::Author;
    use crate::model::sep::{Sep, SepStatus, SepType};

    fn sep(number: u32, kind: SepType, status: SepStatus) -> Sep {
        sep_titled(number, kind, status, "An Example Proposal")
    }

    fn sep_titled(number: u32, kind: SepType, status: SepStatus, title: &str) -> Sep {
        Sep {
            number,
            title: title.to_string(),
            kind,
            status,
            authors: vec![Author::new("A. Author", Some("a@x.org"))],
            headers: Vec::new(),
        }
    }

    #[test]
    fn draft_wins_over_process_type() {
        // Status rules at the top of the table beat the type rules below.
        let record = sep(1, SepType::Process, SepStatus::Draft);
        assert_eq!(classify(&record), Ok(Category::Open));
    }

    #[test]
    fn deferred_wins_over_everything_but_draft() {
        let record = sep(1, SepType::Process, SepStatus::Deferred);
        assert_eq!(classify(&record), Ok(Category::Deferred));
        let record = sep(2, SepType::Informational, SepStatus::Deferred);
        assert_eq!(classify(&record), Ok(Category::Deferred));
    }

    #[test]
    fn active_process_is_meta() {
        let record = sep(1, SepType::Process, SepStatus::Active);
        assert_eq!(classify(&record), Ok(Category::Meta));
    }

    #[test]
    fn withdrawn_or_rejected_process_is_abandoned() {
        for status in [SepStatus::Withdrawn, SepStatus::Rejected] {
            let record = sep(1, SepType::Process, status);
            assert_eq!(classify(&record), Ok(Category::Abandoned));
        }
    }

    #[test]
    fn other_process_statuses_are_historical() {
        for status in [SepStatus::Final, SepStatus::Accepted, SepStatus::Superseded] {
            let record = sep(1, SepType::Process, status);
            assert_eq!(classify(&record), Ok(Category::Historical), "{status:?}");
        }
    }

    #[test]
    fn dead_statuses_are_abandoned_regardless_of_type() {
        for status in [
            SepStatus::Rejected,
            SepStatus::Withdrawn,
            SepStatus::Incomplete,
            SepStatus::Superseded,
        ] {
            let record = sep(1, SepType::StandardsTrack, status);
            assert_eq!(classify(&record), Ok(Category::Abandoned), "{status:?}");
        }
    }

    #[test]
    fn informational_release_schedule_splits_on_status() {
        let active = sep_titled(
            1,
            SepType::Informational,
            SepStatus::Active,
            "Python 9.9 Release Schedule",
        );
        assert_eq!(classify(&active), Ok(Category::OtherInformational));

        let finished = sep_titled(
            2,
            SepType::Informational,
            SepStatus::Final,
            "Python 9.9 Release Schedule",
        );
        assert_eq!(classify(&finished), Ok(Category::Historical));

        let plain_final = sep_titled(3, SepType::Informational, SepStatus::Final, "An API Guide");
        assert_eq!(classify(&plain_final), Ok(Category::OtherInformational));
    }

    #[test]
    fn provisional_accepted_and_final_standards_track() {
        let record = sep(1, SepType::StandardsTrack, SepStatus::Provisional);
        assert_eq!(classify(&record), Ok(Category::Provisional));

        for status in [SepStatus::Accepted, SepStatus::Active] {
            let record = sep(2, SepType::StandardsTrack, status);
            assert_eq!(classify(&record), Ok(Category::Accepted));
        }

        let record = sep(3, SepType::StandardsTrack, SepStatus::Final);
        assert_eq!(classify(&record), Ok(Category::Finished));
    }

    #[test]
    fn every_declared_pair_classifies_to_exactly_one_category() {
        for kind in SepType::ALL {
            for status in SepStatus::ALL {
                let record = sep(1, kind, status);
                classify(&record).unwrap_or_else(|err| {
                    panic!("({kind:?}, {status:?}) must classify: {err}")
                });
            }
        }
    }

    #[test]
    fn grouping_preserves_input_order_inside_buckets() {
        let seps = vec![
            sep(1, SepType::StandardsTrack, SepStatus::Draft),
            sep(5, SepType::Process, SepStatus::Active),
            sep(9, SepType::StandardsTrack, SepStatus::Draft),
        ];
        let buckets = group_by_category(&seps).expect("grouping should succeed");
        let open_numbers: Vec<u32> = buckets.open.iter().map(|sep| sep.number).collect();
        assert_eq!(open_numbers, vec![1, 9]);
        assert_eq!(buckets.meta.len(), 1);
        assert!(buckets.abandoned.is_empty());
    }
}
