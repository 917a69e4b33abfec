use rollbook_core::{
    open_ledger, CsvAttendanceLogRepository, CsvRosterRepository, LedgerError, LedgerService,
};
use std::path::Path;

fn open_in(dir: &Path) -> LedgerService<CsvRosterRepository, CsvAttendanceLogRepository> {
    open_ledger(dir.join("students.csv"), dir.join("attendance.csv")).unwrap()
}

#[test]
fn students_list_in_insertion_order_not_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());

    ledger.add_student("3", "Charlie").unwrap();
    ledger.add_student("1", "Alice").unwrap();
    ledger.add_student("2", "Bob").unwrap();

    let students = ledger.list_students().unwrap();
    let ids: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn id_view_matches_student_order() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());

    ledger.add_student("b", "Bob").unwrap();
    ledger.add_student("a", "Alice").unwrap();

    assert_eq!(ledger.list_student_ids().unwrap(), vec!["b", "a"]);
}

#[test]
fn duplicate_id_fails_and_leaves_roster_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());

    ledger.add_student("1", "Alice").unwrap();
    let err = ledger.add_student("1", "Bob").unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateId(ref id) if id == "1"));

    let students = ledger.list_students().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Alice");
}

#[test]
fn duplicate_check_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());

    ledger.add_student("s1", "Alice").unwrap();
    ledger.add_student("S1", "Bob").unwrap();

    assert_eq!(ledger.list_student_ids().unwrap(), vec!["s1", "S1"]);
}

#[test]
fn input_is_trimmed_before_validation_and_storage() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());

    let student = ledger.add_student("  1 ", "  Alice  ").unwrap();
    assert_eq!(student.id, "1");
    assert_eq!(student.name, "Alice");

    // The trimmed id collides with the stored one.
    let err = ledger.add_student("1", "Someone Else").unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateId(_)));
}

#[test]
fn blank_id_or_name_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_in(dir.path());

    let err = ledger.add_student("   ", "Alice").unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let err = ledger.add_student("1", " ").unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    assert!(ledger.list_students().unwrap().is_empty());
}

#[test]
fn added_students_are_visible_to_a_later_store_value() {
    let dir = tempfile::tempdir().unwrap();

    let first = open_in(dir.path());
    first.add_student("1", "Alice").unwrap();
    drop(first);

    let second = open_in(dir.path());
    let students = second.list_students().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, "1");
}
