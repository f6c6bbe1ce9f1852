//! Error handling.
//!
//! This module provides:
//! - Error type definitions for audits, checklists and initialization
//! - Categorization of transport errors into the audit error taxonomy
//!
//! A header that is missing from a response is not an error. It is reported
//! as a failed check outcome; only failures to obtain a response at all are
//! errors.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{AuditError, ChecklistError, ConnectionErrorKind, InitializationError};
