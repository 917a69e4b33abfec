//! Roster contracts and CSV implementation.
//!
//! # Responsibility
//! - Maintain the unique, insertion-ordered set of students.
//!
//! # Invariants
//! - No two persisted students share an id.
//! - Listing order is persisted file order, never a sort.
//! - The roster is add-only; update and delete do not exist.

use crate::model::student::Student;
use crate::repo::{LedgerError, LedgerResult};
use crate::store;
use log::info;
use std::path::PathBuf;

const ROSTER_HEADER: [&str; 2] = ["ID", "Name"];

/// Repository interface for roster operations.
pub trait RosterRepository {
    /// Appends a new student after validation and duplicate-id rejection.
    fn add_student(&self, id: &str, name: &str) -> LedgerResult<Student>;
    /// Returns all students in insertion order.
    fn list_students(&self) -> LedgerResult<Vec<Student>>;
    /// Returns all student ids, same order as `list_students`.
    fn list_student_ids(&self) -> LedgerResult<Vec<String>>;
}

/// CSV-file-backed roster repository.
pub struct CsvRosterRepository {
    path: PathBuf,
}

impl CsvRosterRepository {
    /// Opens the roster resource, creating it header-only when absent.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        store::ensure_file(&path, &ROSTER_HEADER)?;
        Ok(Self { path })
    }
}

impl RosterRepository for CsvRosterRepository {
    fn add_student(&self, id: &str, name: &str) -> LedgerResult<Student> {
        let student = Student::from_input(id, name)?;

        let mut rows = self.list_students()?;
        if rows.iter().any(|existing| existing.id == student.id) {
            return Err(LedgerError::DuplicateId(student.id));
        }

        rows.push(student.clone());
        store::replace_rows(&self.path, &ROSTER_HEADER, &rows)?;

        info!(
            "event=roster_add module=repo status=ok roster_size={}",
            rows.len()
        );
        Ok(student)
    }

    fn list_students(&self) -> LedgerResult<Vec<Student>> {
        Ok(store::read_rows(&self.path)?)
    }

    fn list_student_ids(&self) -> LedgerResult<Vec<String>> {
        Ok(self
            .list_students()?
            .into_iter()
            .map(|student| student.id)
            .collect())
    }
}
