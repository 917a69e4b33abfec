//! Repository contracts and CSV-backed persistence implementations.
//!
//! # Responsibility
//! - Define storage-facing access contracts for the roster and the log.
//! - Keep file encoding details behind the store boundary.
//!
//! # Invariants
//! - Write paths validate boundary input before touching storage.
//! - Read paths surface undecodable persisted state instead of masking it.

use crate::model::attendance::DateParseError;
use crate::model::student::StudentValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod attendance_repo;
pub mod roster_repo;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Operation-boundary error taxonomy for ledger calls.
///
/// Every operation fails synchronously with exactly one of these kinds; no
/// operation partially applies its effect before failing.
#[derive(Debug)]
pub enum LedgerError {
    /// A required field is blank after trimming.
    Validation(String),
    /// A supplied date string fails `YYYY-MM-DD` parsing.
    InvalidDate(DateParseError),
    /// A roster add targets an id that already exists (exact, case-sensitive).
    DuplicateId(String),
    /// A persisted resource could not be read or atomically replaced.
    Store(StoreError),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message}"),
            Self::InvalidDate(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "a student with id `{id}` already exists"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(_) | Self::DuplicateId(_) => None,
            Self::InvalidDate(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for LedgerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<DateParseError> for LedgerError {
    fn from(value: DateParseError) -> Self {
        Self::InvalidDate(value)
    }
}

impl From<StudentValidationError> for LedgerError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value.to_string())
    }
}
