//! Loading checklists from JSON.
//!
//! A checklist file is a JSON array:
//!
//! ```json
//! [
//!   { "key": "x-frame-options" },
//!   { "key": "Content-Security-Policy",
//!     "expected_substrings": ["www.googletagmanager.com"],
//!     "label": "CSP allows tag manager" }
//! ]
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::HeaderCheck;
use crate::error_handling::ChecklistError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChecklistEntry {
    key: String,
    #[serde(default)]
    expected_substrings: Vec<String>,
    #[serde(default)]
    label: String,
}

/// Parses checklist JSON.
///
/// `source` names the origin of the text in error messages.
///
/// # Errors
///
/// Returns `ChecklistError::Parse` for malformed JSON,
/// `ChecklistError::InvalidHeaderName` for a bad key, and
/// `ChecklistError::Empty` for an empty array.
pub fn parse_checklist(json: &str, source: &Path) -> Result<Vec<HeaderCheck>, ChecklistError> {
    let entries: Vec<ChecklistEntry> =
        serde_json::from_str(json).map_err(|source_err| ChecklistError::Parse {
            path: source.to_path_buf(),
            source: source_err,
        })?;

    if entries.is_empty() {
        return Err(ChecklistError::Empty);
    }

    entries
        .into_iter()
        .map(|entry| HeaderCheck::containing(&entry.key, &entry.label, entry.expected_substrings))
        .collect()
}

/// Reads and parses a checklist file.
///
/// # Errors
///
/// Returns `ChecklistError::Io` if the file cannot be read, otherwise the
/// errors of [`parse_checklist`].
pub fn load_checklist(path: &Path) -> Result<Vec<HeaderCheck>, ChecklistError> {
    let json = std::fs::read_to_string(path).map_err(|source| ChecklistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let checklist = parse_checklist(&json, path)?;
    debug!(
        "Loaded {} checks from {}",
        checklist.len(),
        path.display()
    );
    Ok(checklist)
}
