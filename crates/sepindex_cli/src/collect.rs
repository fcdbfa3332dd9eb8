//! Directory walking and record collection.
//!
//! # Responsibility
//! - Find SEP source files, parse them, and verify filename consistency.
//! - Apply the caller's abort-or-skip policy to per-record failures.
//!
//! # Invariants
//! - `sep-0000.*` (the generated index itself) is never collected.
//! - The returned set is sorted ascending by number.

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use sepindex_core::{parse_sep, ParseError, Sep};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Collectible source files: `sep-<number>.txt` or `sep-<number>.rst`.
static SEP_FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^sep-(\d+)\.(?:txt|rst)$").expect("filename pattern"));

pub type CollectResult<T> = Result<T, CollectError>;

/// What to do when a single record fails to parse or is inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail the whole run on the first bad record.
    #[default]
    Abort,
    /// Log the failure and exclude the record.
    Skip,
}

/// Collection failure: filesystem trouble, a bad record under the abort
/// policy, or a declared number that contradicts the filename.
#[derive(Debug)]
pub enum CollectError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(ParseError),
    NumberMismatch {
        path: PathBuf,
        declared: u32,
        filename: u32,
    },
    InvalidPath(PathBuf),
}

impl Display for CollectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "{err}"),
            Self::NumberMismatch {
                path,
                declared,
                filename,
            } => write!(
                f,
                "SEP number {declared} does not match file name `{}` (expected {filename})",
                path.display()
            ),
            Self::InvalidPath(path) => write!(
                f,
                "`{}` is neither a directory nor a file",
                path.display()
            ),
        }
    }
}

impl Error for CollectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::NumberMismatch { .. } => None,
            Self::InvalidPath(_) => None,
        }
    }
}

impl From<ParseError> for CollectError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

/// Collects validated records from a directory of SEP files, or from one
/// file directly (no filename check in that mode).
pub fn collect_seps(path: &Path, policy: ErrorPolicy) -> CollectResult<Vec<Sep>> {
    if path.is_dir() {
        collect_dir(path, policy)
    } else if path.is_file() {
        Ok(vec![parse_one(path)?])
    } else {
        Err(CollectError::InvalidPath(path.to_path_buf()))
    }
}

fn collect_dir(dir: &Path, policy: ErrorPolicy) -> CollectResult<Vec<Sep>> {
    let io_err = |source| CollectError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut candidates: Vec<(PathBuf, u32)> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(captures) = SEP_FILENAME.captures(name) else {
            continue;
        };
        let Ok(filename_number) = captures[1].parse::<u32>() else {
            continue;
        };
        if filename_number == 0 {
            continue;
        }
        candidates.push((path, filename_number));
    }
    // Directory listing order is platform-dependent; make the walk
    // deterministic.
    candidates.sort();

    let mut seps = Vec::new();
    for (path, filename_number) in candidates {
        match load_checked(&path, filename_number) {
            Ok(sep) => seps.push(sep),
            Err(err) => match policy {
                ErrorPolicy::Abort => return Err(err),
                ErrorPolicy::Skip => {
                    warn!("event=sep_excluded path={} reason={err}", path.display());
                }
            },
        }
    }

    seps.sort_by_key(|sep| sep.number);
    info!("event=seps_collected dir={} count={}", dir.display(), seps.len());
    Ok(seps)
}

fn load_checked(path: &Path, filename_number: u32) -> CollectResult<Sep> {
    let sep = parse_one(path)?;
    if sep.number != filename_number {
        return Err(CollectError::NumberMismatch {
            path: path.to_path_buf(),
            declared: sep.number,
            filename: filename_number,
        });
    }
    Ok(sep)
}

fn parse_one(path: &Path) -> CollectResult<Sep> {
    let file = File::open(path).map_err(|source| CollectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source_id = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());
    Ok(parse_sep(BufReader::new(file), &source_id)?)
}
