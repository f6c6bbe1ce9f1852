//! Audit result types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::checklist::HeaderCheck;

/// The outcome of one check against one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub(crate) check: HeaderCheck,
    pub(crate) present: bool,
    pub(crate) value: Option<String>,
    pub(crate) matched_substrings: Vec<String>,
    pub(crate) missing_substrings: Vec<String>,
    pub(crate) passed: bool,
}

impl CheckOutcome {
    /// The check this outcome belongs to.
    pub fn check(&self) -> &HeaderCheck {
        &self.check
    }

    /// Whether the response carried the header.
    pub fn present(&self) -> bool {
        self.present
    }

    /// The header value, when present.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Required fragments found in the value.
    pub fn matched_substrings(&self) -> &[String] {
        &self.matched_substrings
    }

    /// Required fragments not found (all of them when the header is absent).
    pub fn missing_substrings(&self) -> &[String] {
        &self.missing_substrings
    }

    /// Present, and every required fragment found.
    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// Everything observed about a single audited response.
///
/// Produced once per request by [`evaluate`](super::evaluate); there are no
/// mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    pub(crate) status_code: u16,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) outcomes: Vec<CheckOutcome>,
}

impl AuditResult {
    /// HTTP status code of the response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// All response headers, keyed by lowercase name.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Outcomes in checklist order.
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Number of checks that passed.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of checks that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    /// True when every check passed.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}
