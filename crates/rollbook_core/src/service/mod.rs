//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the operation boundary the UI calls.
//! - Keep callers decoupled from storage details.

pub mod ledger_service;
