//! Report rendering.
//!
//! This module renders an [`AuditReport`](crate::AuditReport) for the
//! operator: a plain-text report with a raw header dump, or a single JSON
//! document for scripts.

mod json;
mod plain;

pub use json::render_json;
pub use plain::render_plain;
