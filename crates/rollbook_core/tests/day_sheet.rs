use rollbook_core::{
    open_ledger, AttendanceStatus, CsvAttendanceLogRepository, CsvRosterRepository, DayMark,
    LedgerError, LedgerService,
};
use std::fs;
use std::path::{Path, PathBuf};

fn open_in(dir: &Path) -> LedgerService<CsvRosterRepository, CsvAttendanceLogRepository> {
    open_ledger(dir.join("students.csv"), dir.join("attendance.csv")).unwrap()
}

fn attendance_path(dir: &Path) -> PathBuf {
    dir.join("attendance.csv")
}

#[test]
fn unsaved_day_defaults_every_student_absent() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();
    ledger.add_student("2", "Bob").unwrap();

    let sheet = ledger.load_day("2024-01-10").unwrap();
    assert_eq!(sheet.len(), 2);
    assert!(sheet
        .iter()
        .all(|record| record.status == AttendanceStatus::Absent));
    assert_eq!(sheet[0].student_id, "1");
    assert_eq!(sheet[1].student_id, "2");
}

#[test]
fn saved_statuses_overlay_the_default_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();
    ledger.add_student("2", "Bob").unwrap();

    ledger
        .save_day(
            "2024-01-10",
            &[DayMark::new("1", AttendanceStatus::Present)],
        )
        .unwrap();

    let sheet = ledger.load_day("2024-01-10").unwrap();
    assert_eq!(sheet[0].status, AttendanceStatus::Present);
    assert_eq!(sheet[1].status, AttendanceStatus::Absent);
}

#[test]
fn load_day_is_a_pure_read() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();
    ledger
        .save_day("2024-01-10", &[DayMark::new("1", AttendanceStatus::Present)])
        .unwrap();

    let before = fs::read(attendance_path(dir.path())).unwrap();
    ledger.load_day("2024-01-10").unwrap();
    ledger.load_day("2024-02-20").unwrap();
    assert_eq!(fs::read(attendance_path(dir.path())).unwrap(), before);
}

#[test]
fn saving_the_same_day_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();
    ledger.add_student("2", "Bob").unwrap();

    let marks = [
        DayMark::new("1", AttendanceStatus::Present),
        DayMark::new("2", AttendanceStatus::Absent),
    ];
    ledger.save_day("2024-01-10", &marks).unwrap();
    let after_first = fs::read(attendance_path(dir.path())).unwrap();

    ledger.save_day("2024-01-10", &marks).unwrap();
    assert_eq!(fs::read(attendance_path(dir.path())).unwrap(), after_first);
}

#[test]
fn saving_one_date_never_perturbs_another() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();
    ledger.add_student("2", "Bob").unwrap();

    ledger
        .save_day(
            "2024-01-10",
            &[
                DayMark::new("1", AttendanceStatus::Present),
                DayMark::new("2", AttendanceStatus::Absent),
            ],
        )
        .unwrap();
    let first_day = ledger.query_by_date("2024-01-10").unwrap();

    ledger
        .save_day(
            "2024-01-11",
            &[
                DayMark::new("1", AttendanceStatus::Absent),
                DayMark::new("2", AttendanceStatus::Present),
            ],
        )
        .unwrap();

    assert_eq!(ledger.query_by_date("2024-01-10").unwrap(), first_day);

    let names: Vec<(&str, &str, AttendanceStatus)> = first_day
        .iter()
        .map(|r| (r.student_id.as_str(), r.name.as_str(), r.status))
        .collect();
    assert_eq!(
        names,
        vec![
            ("1", "Alice", AttendanceStatus::Present),
            ("2", "Bob", AttendanceStatus::Absent),
        ]
    );

    let history = ledger.query_by_student("2").unwrap();
    let history: Vec<(&str, AttendanceStatus)> = history
        .iter()
        .map(|r| (r.date.as_str(), r.status))
        .collect();
    assert_eq!(
        history,
        vec![
            ("2024-01-10", AttendanceStatus::Absent),
            ("2024-01-11", AttendanceStatus::Present),
        ]
    );
}

#[test]
fn resaving_a_day_replaces_its_rows_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();
    ledger.add_student("2", "Bob").unwrap();

    ledger
        .save_day(
            "2024-01-10",
            &[
                DayMark::new("1", AttendanceStatus::Present),
                DayMark::new("2", AttendanceStatus::Present),
            ],
        )
        .unwrap();
    ledger
        .save_day("2024-01-10", &[DayMark::new("1", AttendanceStatus::Absent)])
        .unwrap();

    let records = ledger.query_by_date("2024-01-10").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].student_id, "1");
    assert_eq!(records[0].status, AttendanceStatus::Absent);
}

#[test]
fn orphaned_rows_are_ignored_by_the_sheet_but_survive_in_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();

    // The saver's contract is per-date replacement, not roster membership.
    ledger
        .save_day(
            "2024-01-10",
            &[
                DayMark::new("1", AttendanceStatus::Present),
                DayMark::new("ghost", AttendanceStatus::Present),
            ],
        )
        .unwrap();

    let sheet = ledger.load_day("2024-01-10").unwrap();
    assert_eq!(sheet.len(), 1);
    assert_eq!(sheet[0].student_id, "1");

    let raw = fs::read_to_string(attendance_path(dir.path())).unwrap();
    assert!(raw.contains("ghost"));
}

#[test]
fn roster_growth_shows_up_in_previously_saved_days() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();
    ledger
        .save_day("2024-01-10", &[DayMark::new("1", AttendanceStatus::Present)])
        .unwrap();

    ledger.add_student("2", "Bob").unwrap();

    let sheet = ledger.load_day("2024-01-10").unwrap();
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet[1].student_id, "2");
    assert_eq!(sheet[1].status, AttendanceStatus::Absent);
}

#[test]
fn invalid_dates_are_rejected_without_touching_storage() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();
    ledger
        .save_day("2024-01-10", &[DayMark::new("1", AttendanceStatus::Present)])
        .unwrap();
    let before = fs::read(attendance_path(dir.path())).unwrap();

    let err = ledger.load_day("2024-13-40").unwrap_err();
    assert!(matches!(err, LedgerError::InvalidDate(_)));

    let err = ledger
        .save_day("not-a-date", &[DayMark::new("1", AttendanceStatus::Absent)])
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidDate(_)));

    assert_eq!(fs::read(attendance_path(dir.path())).unwrap(), before);
}

#[test]
fn duplicate_marks_in_one_batch_persist_and_resolve_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());
    ledger.add_student("1", "Alice").unwrap();

    ledger
        .save_day(
            "2024-01-10",
            &[
                DayMark::new("1", AttendanceStatus::Absent),
                DayMark::new("1", AttendanceStatus::Present),
            ],
        )
        .unwrap();

    // Both rows are physically present.
    let raw = fs::read_to_string(attendance_path(dir.path())).unwrap();
    assert_eq!(raw.matches("2024-01-10,1,").count(), 2);

    // Read queries resolve the later row.
    let records = ledger.query_by_date("2024-01-10").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Present);
}
