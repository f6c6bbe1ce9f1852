//! Header checklists.
//!
//! A checklist is an ordered list of [`HeaderCheck`]s. Each check names a
//! response header that must be present and, optionally, literal fragments
//! its value must contain. Checklists come from the built-in
//! [`Profile`](crate::Profile)s or from a JSON file.

mod load;
mod profiles;

use serde::Serialize;

use crate::error_handling::ChecklistError;

pub use load::{load_checklist, parse_checklist};
pub use profiles::merge_checklists;

/// A single header expectation.
///
/// Keys are lowercase header names. An empty `expected_substrings` means the
/// header only has to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCheck {
    key: String,
    expected_substrings: Vec<String>,
    label: String,
}

impl HeaderCheck {
    /// A check that passes whenever the header is present.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::InvalidHeaderName` if `key` is not a valid
    /// HTTP header name.
    pub fn present(key: &str, label: &str) -> Result<Self, ChecklistError> {
        Self::containing(key, label, std::iter::empty::<&str>())
    }

    /// A check that requires the header to contain every one of `substrings`.
    ///
    /// Duplicate and empty fragments are dropped; order is kept for reporting.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::InvalidHeaderName` if `key` is not a valid
    /// HTTP header name.
    pub fn containing<I, S>(key: &str, label: &str, substrings: I) -> Result<Self, ChecklistError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = normalize_key(key)?;
        let mut expected_substrings: Vec<String> = Vec::new();
        for fragment in substrings {
            let fragment = fragment.into();
            if !fragment.is_empty() && !expected_substrings.contains(&fragment) {
                expected_substrings.push(fragment);
            }
        }
        let label = if label.trim().is_empty() {
            key.clone()
        } else {
            label.trim().to_string()
        };
        Ok(Self {
            key,
            expected_substrings,
            label,
        })
    }

    /// Lowercase header name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Fragments the header value must contain.
    pub fn expected_substrings(&self) -> &[String] {
        &self.expected_substrings
    }

    /// Human-readable name used in reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True when the check only asks for the header to be present.
    pub fn is_presence_only(&self) -> bool {
        self.expected_substrings.is_empty()
    }

    /// Adds fragments from `other`, keeping this check's key and label.
    pub(crate) fn absorb(&mut self, other: &HeaderCheck) {
        for fragment in &other.expected_substrings {
            if !self.expected_substrings.contains(fragment) {
                self.expected_substrings.push(fragment.clone());
            }
        }
    }
}

/// Validates a header name and lowercases it.
fn normalize_key(key: &str) -> Result<String, ChecklistError> {
    let trimmed = key.trim();
    reqwest::header::HeaderName::from_bytes(trimmed.as_bytes())
        .map(|name| name.as_str().to_string())
        .map_err(|_| ChecklistError::InvalidHeaderName(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercased() {
        let check = HeaderCheck::present("Content-Security-Policy", "CSP").unwrap();
        assert_eq!(check.key(), "content-security-policy");
        assert_eq!(check.label(), "CSP");
        assert!(check.is_presence_only());
    }

    #[test]
    fn test_invalid_key_rejected() {
        assert!(matches!(
            HeaderCheck::present("x frame options", ""),
            Err(ChecklistError::InvalidHeaderName(_))
        ));
        assert!(matches!(
            HeaderCheck::present("", ""),
            Err(ChecklistError::InvalidHeaderName(_))
        ));
    }

    #[test]
    fn test_label_defaults_to_key() {
        let check = HeaderCheck::present("X-Frame-Options", "  ").unwrap();
        assert_eq!(check.label(), "x-frame-options");
    }

    #[test]
    fn test_substrings_deduplicated_in_order() {
        let check = HeaderCheck::containing(
            "content-security-policy",
            "CSP",
            ["b.example", "a.example", "b.example", ""],
        )
        .unwrap();
        assert_eq!(check.expected_substrings(), ["b.example", "a.example"]);
        assert!(!check.is_presence_only());
    }

    #[test]
    fn test_absorb_unions_substrings() {
        let mut check =
            HeaderCheck::containing("content-security-policy", "CSP", ["a.example"]).unwrap();
        let other = HeaderCheck::containing(
            "content-security-policy",
            "Other",
            ["a.example", "b.example"],
        )
        .unwrap();
        check.absorb(&other);
        assert_eq!(check.expected_substrings(), ["a.example", "b.example"]);
        assert_eq!(check.label(), "CSP");
    }
}
