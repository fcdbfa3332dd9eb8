//! Atomic index document replacement.
//!
//! # Responsibility
//! - Render into a temporary file next to the destination and persist it
//!   into place only on success.
//!
//! # Invariants
//! - A failed run never leaves a partial or corrupt document behind; any
//!   pre-existing output file survives untouched.

use chrono::NaiveDate;
use log::info;
use sepindex_core::{write_index, RenderError, Sep};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub type OutputResult<T> = Result<T, OutputError>;

/// Output failure: the render itself, or filesystem trouble around the
/// temporary file and the final rename.
#[derive(Debug)]
pub enum OutputError {
    Render(RenderError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for OutputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for OutputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<RenderError> for OutputError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

/// Renders the index for a number-sorted record set and atomically replaces
/// `out_path` with it.
pub fn write_index_file(
    seps: &[Sep],
    out_path: &Path,
    generated_on: NaiveDate,
) -> OutputResult<()> {
    let io_err = |source| OutputError::Io {
        path: out_path.to_path_buf(),
        source,
    };

    let dir = match out_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // The temp file lives in the destination directory so the final rename
    // stays on one filesystem.
    let temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    let mut writer = BufWriter::new(temp);
    write_index(seps, &mut writer, generated_on)?;
    writer.flush().map_err(io_err)?;

    let temp = writer
        .into_inner()
        .map_err(|err| io_err(err.into_error()))?;
    temp.persist(out_path).map_err(|err| io_err(err.error))?;

    info!(
        "event=index_written output={} records={}",
        out_path.display(),
        seps.len()
    );
    Ok(())
}
