//! Attendance log contracts and CSV implementation.
//!
//! # Responsibility
//! - Provide read access to persisted attendance facts in file order.
//! - Replace one date's worth of rows wholesale, leaving other dates intact.
//!
//! # Invariants
//! - After `replace_day`, at most one row exists per `(date, student)` pair
//!   for the replaced date, provided the submitted batch held one per student.
//! - An unreadable or undecodable log aborts a replacement before any write.
//! - Rows for dates other than the replaced one are carried over byte-for-row
//!   in their original order.

use crate::model::attendance::{AttendanceEntry, DayMark, LedgerDate};
use crate::repo::LedgerResult;
use crate::store;
use log::{debug, info};
use std::collections::HashSet;
use std::path::PathBuf;

const LOG_HEADER: [&str; 3] = ["Date", "Student ID", "Status"];

/// Repository interface over the append/replace-by-date attendance log.
pub trait AttendanceLogRepository {
    /// Returns every persisted entry in file order.
    fn entries(&self) -> LedgerResult<Vec<AttendanceEntry>>;
    /// Returns entries whose date equals `date`, in file order.
    fn entries_for_date(&self, date: &LedgerDate) -> LedgerResult<Vec<AttendanceEntry>>;
    /// Returns entries whose student id equals `student_id`, in file order.
    fn entries_for_student(&self, student_id: &str) -> LedgerResult<Vec<AttendanceEntry>>;
    /// Atomically replaces all rows for `date` with the submitted batch.
    fn replace_day(&self, date: &LedgerDate, marks: &[DayMark]) -> LedgerResult<()>;
}

/// CSV-file-backed attendance log repository.
pub struct CsvAttendanceLogRepository {
    path: PathBuf,
}

impl CsvAttendanceLogRepository {
    /// Opens the attendance resource, creating it header-only when absent.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        store::ensure_file(&path, &LOG_HEADER)?;
        Ok(Self { path })
    }
}

impl AttendanceLogRepository for CsvAttendanceLogRepository {
    fn entries(&self) -> LedgerResult<Vec<AttendanceEntry>> {
        Ok(store::read_rows(&self.path)?)
    }

    fn entries_for_date(&self, date: &LedgerDate) -> LedgerResult<Vec<AttendanceEntry>> {
        let mut rows = self.entries()?;
        rows.retain(|entry| entry.date == *date);
        Ok(rows)
    }

    fn entries_for_student(&self, student_id: &str) -> LedgerResult<Vec<AttendanceEntry>> {
        let mut rows = self.entries()?;
        rows.retain(|entry| entry.student_id == student_id);
        Ok(rows)
    }

    fn replace_day(&self, date: &LedgerDate, marks: &[DayMark]) -> LedgerResult<()> {
        // The whole log is read up front; a corrupt file aborts here, before
        // the staged rewrite is even created.
        let mut rows = self.entries()?;
        let before = rows.len();
        rows.retain(|entry| entry.date != *date);
        let kept = rows.len();

        // The batch is written verbatim, in caller order. Duplicate student
        // ids within one batch persist physically; read queries resolve them
        // last-write-wins by file order.
        let mut seen = HashSet::new();
        let duplicate_ids = marks
            .iter()
            .filter(|mark| !seen.insert(mark.student_id.as_str()))
            .count();
        if duplicate_ids > 0 {
            debug!(
                "event=day_replace module=repo date={date} duplicate_ids={duplicate_ids}"
            );
        }

        for mark in marks {
            rows.push(AttendanceEntry {
                date: date.clone(),
                student_id: mark.student_id.clone(),
                status: mark.status,
            });
        }
        store::replace_rows(&self.path, &LOG_HEADER, &rows)?;

        info!(
            "event=day_replace module=repo status=ok date={date} discarded={} written={}",
            before - kept,
            marks.len()
        );
        Ok(())
    }
}
