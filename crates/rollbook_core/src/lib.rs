//! Core domain logic for the rollbook attendance ledger.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::attendance::{
    AttendanceEntry, AttendanceStatus, DateParseError, DayMark, LedgerDate,
};
pub use model::student::{Student, StudentValidationError};
pub use repo::attendance_repo::{AttendanceLogRepository, CsvAttendanceLogRepository};
pub use repo::roster_repo::{CsvRosterRepository, RosterRepository};
pub use repo::{LedgerError, LedgerResult};
pub use service::ledger_service::{
    open_ledger, DayRecord, HistoryRecord, LedgerService, UNKNOWN_STUDENT_NAME,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
