//! Command-line caller over the rollbook core boundary.
//!
//! # Responsibility
//! - Collect raw argv strings and hand them to core ledger operations.
//! - Render returned records or the error; no business logic lives here.

use rollbook_core::{default_log_level, init_logging, open_ledger, AttendanceStatus, DayMark};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const ROSTER_FILE: &str = "students.csv";
const ATTENDANCE_FILE: &str = "attendance.csv";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return ExitCode::from(2);
    }

    let data_dir = env::var("ROLLBOOK_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // Logging is best-effort for the CLI; the ledger stays usable without it.
    if let Ok(abs) = std::fs::canonicalize(&data_dir) {
        let log_dir = abs.join("logs");
        if let Some(log_dir) = log_dir.to_str() {
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("rollbook: logging disabled: {err}");
            }
        }
    }

    match run(&data_dir, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Usage(message)) => {
            eprintln!("rollbook: {message}");
            print_usage();
            ExitCode::from(2)
        }
        Err(RunError::Ledger(err)) => {
            eprintln!("rollbook: {err}");
            ExitCode::FAILURE
        }
    }
}

enum RunError {
    Usage(String),
    Ledger(rollbook_core::LedgerError),
}

impl From<rollbook_core::LedgerError> for RunError {
    fn from(value: rollbook_core::LedgerError) -> Self {
        Self::Ledger(value)
    }
}

fn run(data_dir: &Path, args: &[String]) -> Result<(), RunError> {
    let ledger = open_ledger(
        data_dir.join(ROSTER_FILE),
        data_dir.join(ATTENDANCE_FILE),
    )?;

    match args[0].as_str() {
        "add-student" => {
            let (id, name) = match &args[1..] {
                [id, name] => (id, name),
                _ => return Err(RunError::Usage("add-student expects <id> <name>".into())),
            };
            let student = ledger.add_student(id, name)?;
            println!("added {} {}", student.id, student.name);
        }
        "list-students" => {
            for student in ledger.list_students()? {
                println!("{}\t{}", student.id, student.name);
            }
        }
        "load-day" => {
            let date = args
                .get(1)
                .cloned()
                .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            for record in ledger.load_day(&date)? {
                println!("{}\t{}\t{}", record.student_id, record.name, record.status);
            }
        }
        "save-day" => {
            let date = args
                .get(1)
                .ok_or_else(|| RunError::Usage("save-day expects <date> <id>=<status>...".into()))?;
            let marks = parse_marks(&args[2..]).map_err(RunError::Usage)?;
            ledger.save_day(date, &marks)?;
            println!("saved {} records for {}", marks.len(), date.trim());
        }
        "by-date" => {
            let date = args
                .get(1)
                .ok_or_else(|| RunError::Usage("by-date expects <date>".into()))?;
            for record in ledger.query_by_date(date)? {
                println!("{}\t{}\t{}", record.student_id, record.name, record.status);
            }
        }
        "by-student" => {
            let id = args
                .get(1)
                .ok_or_else(|| RunError::Usage("by-student expects <id>".into()))?;
            for record in ledger.query_by_student(id)? {
                println!("{}\t{}", record.date, record.status);
            }
        }
        other => {
            return Err(RunError::Usage(format!("unknown command `{other}`")));
        }
    }

    Ok(())
}

fn parse_marks(raw: &[String]) -> Result<Vec<DayMark>, String> {
    if raw.is_empty() {
        return Err("save-day expects at least one <id>=<status> pair".into());
    }
    raw.iter().map(|pair| parse_mark(pair)).collect()
}

fn parse_mark(raw: &str) -> Result<DayMark, String> {
    let (id, status) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <id>=<status>, got `{raw}`"))?;
    let status = AttendanceStatus::parse(status)
        .ok_or_else(|| format!("expected status Present or Absent, got `{status}`"))?;
    Ok(DayMark::new(id, status))
}

fn print_usage() {
    eprintln!("usage: rollbook <command> [args]");
    eprintln!();
    eprintln!("  add-student <id> <name>            register a student");
    eprintln!("  list-students                      list the roster in insertion order");
    eprintln!("  load-day [date]                    day sheet for a date (default: today)");
    eprintln!("  save-day <date> <id>=<status>...   replace a day's attendance");
    eprintln!("  by-date <date>                     saved records for a date");
    eprintln!("  by-student <id>                    a student's dated history");
    eprintln!();
    eprintln!("dates are YYYY-MM-DD; status is Present or Absent");
    eprintln!("storage directory comes from ROLLBOOK_DATA_DIR (default: current directory)");
}
