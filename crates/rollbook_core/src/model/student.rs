//! Student roster record.
//!
//! # Responsibility
//! - Define the canonical roster row and its boundary validation.
//!
//! # Invariants
//! - `id` is case-sensitive, non-empty, and immutable once created.
//! - `name` is non-empty; there is no update operation, only add.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One registered student.
///
/// The serde renames pin the persisted column names of the roster resource
/// (`ID,Name`), so the struct field names stay idiomatic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Caller-supplied identifier, unique across the roster.
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name shown by query results.
    #[serde(rename = "Name")]
    pub name: String,
}

/// Boundary validation failure for roster input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyId,
    EmptyName,
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "student id must not be empty"),
            Self::EmptyName => write!(f, "student name must not be empty"),
        }
    }
}

impl Error for StudentValidationError {}

impl Student {
    /// Builds a roster record from raw boundary input.
    ///
    /// # Contract
    /// - Leading/trailing whitespace is trimmed from both fields.
    /// - Either field blank after trimming is a validation error.
    pub fn from_input(id: &str, name: &str) -> Result<Self, StudentValidationError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(StudentValidationError::EmptyId);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(StudentValidationError::EmptyName);
        }
        Ok(Self {
            id: id.to_owned(),
            name: name.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Student, StudentValidationError};

    #[test]
    fn from_input_trims_both_fields() {
        let student = Student::from_input("  s1 ", " Alice  ").unwrap();
        assert_eq!(student.id, "s1");
        assert_eq!(student.name, "Alice");
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = Student::from_input("   ", "Alice").unwrap_err();
        assert_eq!(err, StudentValidationError::EmptyId);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Student::from_input("s1", " ").unwrap_err();
        assert_eq!(err, StudentValidationError::EmptyName);
    }
}
