//! Checklist evaluation.
//!
//! Pure functions: the same response and checklist always give the same
//! result.

use std::collections::BTreeMap;

use super::result::{AuditResult, CheckOutcome};
use crate::checklist::HeaderCheck;
use crate::config::HEADER_VALUE_SEPARATOR;
use crate::fetch::RawResponse;

/// Lowercases header names and joins repeated headers in arrival order.
pub(crate) fn normalize_headers(raw: &[(String, String)]) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in raw {
        headers
            .entry(name.trim().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(HEADER_VALUE_SEPARATOR);
                existing.push_str(value);
            })
            .or_insert_with(|| value.clone());
    }
    headers
}

/// Evaluates one check against normalized headers.
///
/// Fragments are matched by literal containment, never as patterns.
pub(crate) fn evaluate_check(check: &HeaderCheck, headers: &BTreeMap<String, String>) -> CheckOutcome {
    let Some(value) = headers.get(check.key()) else {
        return CheckOutcome {
            check: check.clone(),
            present: false,
            value: None,
            matched_substrings: Vec::new(),
            missing_substrings: check.expected_substrings().to_vec(),
            passed: false,
        };
    };

    let (matched, missing): (Vec<String>, Vec<String>) = check
        .expected_substrings()
        .iter()
        .cloned()
        .partition(|fragment| value.contains(fragment.as_str()));

    CheckOutcome {
        check: check.clone(),
        present: true,
        value: Some(value.clone()),
        passed: missing.is_empty(),
        matched_substrings: matched,
        missing_substrings: missing,
    }
}

/// Evaluates a checklist against a response.
///
/// Every check runs, in order, whatever the earlier outcomes were.
pub fn evaluate(response: &RawResponse, checklist: &[HeaderCheck]) -> AuditResult {
    let headers = normalize_headers(&response.headers);
    let outcomes = checklist
        .iter()
        .map(|check| evaluate_check(check, &headers))
        .collect();
    AuditResult {
        status_code: response.status,
        headers,
        outcomes,
    }
}
