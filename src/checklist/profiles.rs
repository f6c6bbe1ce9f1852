//! Built-in checklists.

use super::HeaderCheck;
use crate::config::{
    Profile, ANALYTICS_CSP_SOURCES, HEADER_ACCESS_CONTROL_ALLOW_ORIGIN,
    HEADER_CONTENT_SECURITY_POLICY, HEADER_CROSS_ORIGIN_RESOURCE_POLICY, HEADER_REFERRER_POLICY,
    HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_X_DNS_PREFETCH_CONTROL, HEADER_X_FRAME_OPTIONS, HEADER_X_XSS_PROTECTION,
};

// Keys below are lowercase constants, so validation is skipped.
fn check(key: &str, label: &str, substrings: &[&str]) -> HeaderCheck {
    HeaderCheck {
        key: key.to_string(),
        expected_substrings: substrings.iter().map(|s| s.to_string()).collect(),
        label: label.to_string(),
    }
}

fn baseline() -> Vec<HeaderCheck> {
    vec![
        check(HEADER_X_CONTENT_TYPE_OPTIONS, "X-Content-Type-Options", &[]),
        check(HEADER_X_FRAME_OPTIONS, "X-Frame-Options", &[]),
        check(HEADER_X_XSS_PROTECTION, "X-XSS-Protection", &[]),
        check(
            HEADER_STRICT_TRANSPORT_SECURITY,
            "Strict-Transport-Security",
            &[],
        ),
        check(HEADER_CONTENT_SECURITY_POLICY, "Content-Security-Policy", &[]),
        check(HEADER_REFERRER_POLICY, "Referrer-Policy", &[]),
        check(HEADER_X_DNS_PREFETCH_CONTROL, "X-DNS-Prefetch-Control", &[]),
    ]
}

fn analytics() -> Vec<HeaderCheck> {
    baseline()
        .into_iter()
        .map(|c| {
            if c.key == HEADER_CONTENT_SECURITY_POLICY {
                check(
                    HEADER_CONTENT_SECURITY_POLICY,
                    "Content-Security-Policy (analytics sources)",
                    ANALYTICS_CSP_SOURCES,
                )
            } else {
                c
            }
        })
        .collect()
}

fn uploads() -> Vec<HeaderCheck> {
    vec![
        check(HEADER_X_CONTENT_TYPE_OPTIONS, "X-Content-Type-Options", &[]),
        check(
            HEADER_CROSS_ORIGIN_RESOURCE_POLICY,
            "Cross-Origin-Resource-Policy",
            &[],
        ),
    ]
}

fn cors() -> Vec<HeaderCheck> {
    vec![check(
        HEADER_ACCESS_CONTROL_ALLOW_ORIGIN,
        "Access-Control-Allow-Origin",
        &[],
    )]
}

impl Profile {
    /// Returns the checks this profile runs, in report order.
    pub fn checklist(&self) -> Vec<HeaderCheck> {
        match self {
            Profile::Baseline => baseline(),
            Profile::Analytics => analytics(),
            Profile::Uploads => uploads(),
            Profile::Cors => cors(),
            Profile::All => merge_checklists([analytics(), uploads(), cors()]),
        }
    }
}

/// Concatenates checklists, merging checks that share a key.
///
/// The first occurrence of a key keeps its position and label; fragments
/// from later occurrences are appended to it.
pub fn merge_checklists<I>(checklists: I) -> Vec<HeaderCheck>
where
    I: IntoIterator<Item = Vec<HeaderCheck>>,
{
    let mut merged: Vec<HeaderCheck> = Vec::new();
    for candidate in checklists.into_iter().flatten() {
        match merged.iter_mut().find(|c| c.key == candidate.key) {
            Some(existing) => existing.absorb(&candidate),
            None => merged.push(candidate),
        }
    }
    merged
}
