//! Ledger use-case service.
//!
//! # Responsibility
//! - Expose the full operation boundary: roster mutation/query, day load,
//!   day save, and historical queries.
//! - Join attendance facts against the roster for display names.
//!
//! # Invariants
//! - Raw boundary strings are validated here (or deeper) before storage use.
//! - `load_day` is a pure read; it never mutates persisted state.
//! - Day-sheet order follows roster insertion order; date-query order follows
//!   first appearance in the persisted file.

use crate::model::attendance::{AttendanceStatus, DayMark, LedgerDate};
use crate::model::student::Student;
use crate::repo::attendance_repo::{AttendanceLogRepository, CsvAttendanceLogRepository};
use crate::repo::roster_repo::{CsvRosterRepository, RosterRepository};
use crate::repo::{LedgerError, LedgerResult};
use log::info;
use std::collections::HashMap;
use std::path::PathBuf;

/// Display name used when a log row references a student absent from the
/// roster.
pub const UNKNOWN_STUDENT_NAME: &str = "Unknown";

/// One student's row in a day sheet or a by-date query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub student_id: String,
    pub name: String,
    pub status: AttendanceStatus,
}

/// One dated fact from a student's attendance history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub date: LedgerDate,
    pub status: AttendanceStatus,
}

/// Service facade over the roster and attendance repositories.
///
/// Constructed once at startup with explicit storage paths (see
/// [`open_ledger`]); callers never touch the underlying files directly.
pub struct LedgerService<R: RosterRepository, A: AttendanceLogRepository> {
    roster: R,
    log: A,
}

impl<R: RosterRepository, A: AttendanceLogRepository> LedgerService<R, A> {
    /// Creates a service using the provided repository implementations.
    pub fn new(roster: R, log: A) -> Self {
        Self { roster, log }
    }

    /// Registers a new student.
    ///
    /// # Errors
    /// - `Validation` when id or name is blank after trimming.
    /// - `DuplicateId` when the trimmed id already exists (exact match).
    pub fn add_student(&self, id: &str, name: &str) -> LedgerResult<Student> {
        self.roster.add_student(id, name)
    }

    /// Lists all students in insertion order.
    pub fn list_students(&self) -> LedgerResult<Vec<Student>> {
        self.roster.list_students()
    }

    /// Lists all student ids, same order as `list_students`.
    pub fn list_student_ids(&self) -> LedgerResult<Vec<String>> {
        self.roster.list_student_ids()
    }

    /// Builds the editable day sheet for `date`.
    ///
    /// Every current roster student starts as `Absent`; previously saved
    /// rows for the date overlay their status. Orphaned log rows are ignored
    /// here (they remain in the persisted log). Result order is roster
    /// insertion order.
    pub fn load_day(&self, date: &str) -> LedgerResult<Vec<DayRecord>> {
        let date = LedgerDate::parse(date)?;
        let roster = self.roster.list_students()?;
        let saved = self.log.entries_for_date(&date)?;

        let mut statuses: HashMap<&str, AttendanceStatus> = HashMap::new();
        for entry in &saved {
            statuses.insert(entry.student_id.as_str(), entry.status);
        }

        Ok(roster
            .into_iter()
            .map(|student| {
                let status = statuses
                    .get(student.id.as_str())
                    .copied()
                    .unwrap_or(AttendanceStatus::Absent);
                DayRecord {
                    status,
                    student_id: student.id,
                    name: student.name,
                }
            })
            .collect())
    }

    /// Replaces all persisted attendance for `date` with `marks`.
    ///
    /// Either the full replacement lands atomically or persisted state is
    /// unchanged; other dates' rows are never disturbed.
    pub fn save_day(&self, date: &str, marks: &[DayMark]) -> LedgerResult<()> {
        let date = LedgerDate::parse(date)?;
        self.log.replace_day(&date, marks)
    }

    /// Returns the persisted facts for `date`, joined with roster names.
    ///
    /// Duplicate rows for one student (possible in hand-edited storage)
    /// resolve last-write-wins by file order, keeping the first-seen
    /// position. Ids absent from the roster resolve to
    /// [`UNKNOWN_STUDENT_NAME`].
    pub fn query_by_date(&self, date: &str) -> LedgerResult<Vec<DayRecord>> {
        let date = LedgerDate::parse(date)?;
        let rows = self.log.entries_for_date(&date)?;
        let names: HashMap<String, String> = self
            .roster
            .list_students()?
            .into_iter()
            .map(|student| (student.id, student.name))
            .collect();

        let mut records: Vec<DayRecord> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for entry in rows {
            match positions.get(&entry.student_id) {
                Some(&at) => records[at].status = entry.status,
                None => {
                    let name = names
                        .get(&entry.student_id)
                        .cloned()
                        .unwrap_or_else(|| UNKNOWN_STUDENT_NAME.to_owned());
                    positions.insert(entry.student_id.clone(), records.len());
                    records.push(DayRecord {
                        student_id: entry.student_id,
                        name,
                        status: entry.status,
                    });
                }
            }
        }
        Ok(records)
    }

    /// Returns every persisted fact for `student_id`, in file order.
    ///
    /// An id missing from the roster is not an error; it simply has no
    /// history. Blank input is rejected before storage is touched.
    pub fn query_by_student(&self, student_id: &str) -> LedgerResult<Vec<HistoryRecord>> {
        let student_id = student_id.trim();
        if student_id.is_empty() {
            return Err(LedgerError::Validation(
                "student id must not be empty".to_owned(),
            ));
        }
        Ok(self
            .log
            .entries_for_student(student_id)?
            .into_iter()
            .map(|entry| HistoryRecord {
                date: entry.date,
                status: entry.status,
            })
            .collect())
    }
}

/// Opens a CSV-backed ledger over the two persisted resources, creating each
/// header-only when absent.
pub fn open_ledger(
    roster_path: impl Into<PathBuf>,
    attendance_path: impl Into<PathBuf>,
) -> LedgerResult<LedgerService<CsvRosterRepository, CsvAttendanceLogRepository>> {
    let roster = CsvRosterRepository::open(roster_path)?;
    let log = CsvAttendanceLogRepository::open(attendance_path)?;
    info!("event=ledger_open module=service status=ok");
    Ok(LedgerService::new(roster, log))
}
