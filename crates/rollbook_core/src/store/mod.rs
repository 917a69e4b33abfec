//! CSV storage bootstrap and file-replacement seam.
//!
//! # Responsibility
//! - Create the persisted resources header-only on first access.
//! - Own the single atomic-replace primitive used by every mutating call.
//!
//! # Invariants
//! - No application data is read or written before the resource exists.
//! - A failed replacement leaves the original file byte-identical.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod csv_file;

pub use csv_file::{ensure_file, read_rows, replace_file, replace_rows};

pub type StoreResult<T> = Result<T, StoreError>;

/// File-level failure for a persisted ledger resource.
#[derive(Debug)]
pub enum StoreError {
    /// The resource could not be created with its header row.
    Create { path: PathBuf, source: csv::Error },
    /// The resource could not be opened or a row failed to decode.
    Read { path: PathBuf, source: csv::Error },
    /// A replacement row set could not be encoded into the staged file.
    Write { path: PathBuf, source: csv::Error },
    /// The staged file could not be created or renamed over the original.
    Replace {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create { path, source } => {
                write!(f, "failed to create `{}`: {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to stage rows for `{}`: {source}", path.display())
            }
            Self::Replace { path, source } => {
                write!(f, "failed to replace `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Create { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => {
                Some(source)
            }
            Self::Replace { source, .. } => Some(source),
        }
    }
}
