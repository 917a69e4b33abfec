//! Canonical records for the attendance ledger.
//!
//! # Responsibility
//! - Define the typed rows persisted to the roster and attendance resources.
//! - Validate raw boundary input (ids, names, dates) before it reaches storage.
//!
//! # Invariants
//! - Every record field is validated where it is parsed, never downstream.
//! - Persisted column names are pinned by serde renames, not by struct naming.

pub mod attendance;
pub mod student;
