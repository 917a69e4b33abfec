//! Attendance domain records.
//!
//! # Responsibility
//! - Define the persisted attendance fact and its status vocabulary.
//! - Provide the validating `YYYY-MM-DD` date newtype used at every boundary.
//!
//! # Invariants
//! - A `LedgerDate` only ever holds a 10-character, calendar-valid ISO date.
//! - Malformed persisted dates fail row decoding instead of loading partially.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

// chrono accepts unpadded month/day components, so the shape check pins the
// exact 10-character form the storage contract uses for string comparison.
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Calendar day an attendance fact belongs to, kept in `YYYY-MM-DD` form.
///
/// Stored and compared as its string form; two entries belong to the same
/// day exactly when their `LedgerDate` values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LedgerDate(String);

/// Rejection of a raw date string that is not a valid `YYYY-MM-DD` day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    raw: String,
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date `{}`; expected YYYY-MM-DD", self.raw)
    }
}

impl Error for DateParseError {}

impl LedgerDate {
    /// Parses raw boundary input into a validated ledger date.
    ///
    /// # Contract
    /// - Leading/trailing whitespace is trimmed before validation.
    /// - The trimmed value must match `YYYY-MM-DD` exactly and name a real
    ///   calendar day (`2024-13-40` is rejected).
    pub fn parse(raw: &str) -> Result<Self, DateParseError> {
        let trimmed = raw.trim();
        if !ISO_DATE_RE.is_match(trimmed)
            || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err()
        {
            return Err(DateParseError {
                raw: raw.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the `YYYY-MM-DD` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LedgerDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for LedgerDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LedgerDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Attendance state recorded for one student on one day.
///
/// Serialized as the literal strings `Present` / `Absent` in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Returns the persisted literal for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }

    /// Parses the persisted literal form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(Self::Present),
            "Absent" => Some(Self::Absent),
            _ => None,
        }
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One persisted attendance fact, keyed by `(date, student_id)`.
///
/// The serde renames pin the persisted column names of the attendance
/// resource (`Date,Student ID,Status`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    #[serde(rename = "Date")]
    pub date: LedgerDate,
    /// May reference a student no longer present in the roster; such
    /// orphaned rows are tolerated and resolved at query time.
    #[serde(rename = "Student ID")]
    pub student_id: String,
    #[serde(rename = "Status")]
    pub status: AttendanceStatus,
}

/// Per-student status submitted to a day save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMark {
    pub student_id: String,
    pub status: AttendanceStatus,
}

impl DayMark {
    pub fn new(student_id: impl Into<String>, status: AttendanceStatus) -> Self {
        Self {
            student_id: student_id.into(),
            status,
        }
    }
}
