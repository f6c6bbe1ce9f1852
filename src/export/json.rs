//! JSON report.

use serde::Serialize;

use crate::audit::AuditResult;
use crate::AuditReport;

#[derive(Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
    all_passed: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    url: &'a str,
    method: &'a str,
    elapsed_seconds: f64,
    summary: Summary,
    #[serde(flatten)]
    result: &'a AuditResult,
}

/// Renders the report as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_json(report: &AuditReport) -> Result<String, serde_json::Error> {
    let result = &report.result;
    let document = JsonReport {
        url: &report.url,
        method: &report.method,
        elapsed_seconds: report.elapsed_seconds,
        summary: Summary {
            total: result.outcomes().len(),
            passed: result.passed_count(),
            failed: result.failed_count(),
            all_passed: result.all_passed(),
        },
        result,
    };
    serde_json::to_string_pretty(&document)
}
