//! Plain-text report.

use colored::*;

use crate::audit::CheckOutcome;
use crate::AuditReport;

fn describe_outcome(outcome: &CheckOutcome) -> String {
    let check = outcome.check();
    let status = if outcome.passed() {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    };

    let detail = match outcome.value() {
        None => "header missing".to_string(),
        Some(value) if check.is_presence_only() => value.to_string(),
        Some(_) => {
            let mut parts = Vec::new();
            if !outcome.matched_substrings().is_empty() {
                parts.push(format!("found {}", outcome.matched_substrings().join(", ")));
            }
            if !outcome.missing_substrings().is_empty() {
                parts.push(format!(
                    "missing {}",
                    outcome.missing_substrings().join(", ")
                ));
            }
            parts.join("; ")
        }
    };

    format!("  {} {} ({}): {}", status, check.label(), check.key(), detail)
}

/// Renders the report as human-readable text.
///
/// One line per check in checklist order, a summary line, then every
/// response header sorted by name.
pub fn render_plain(report: &AuditReport) -> String {
    let result = &report.result;
    let mut lines = Vec::with_capacity(result.outcomes().len() + result.headers().len() + 6);

    lines.push(format!(
        "{} {} {} -> {}",
        "Security header audit:".bold(),
        report.method,
        report.url,
        result.status_code()
    ));
    lines.push(String::new());

    lines.extend(result.outcomes().iter().map(describe_outcome));

    lines.push(String::new());
    let summary = format!(
        "{}/{} checks passed in {:.2}s",
        result.passed_count(),
        result.outcomes().len(),
        report.elapsed_seconds
    );
    lines.push(if result.all_passed() {
        summary.green().to_string()
    } else {
        summary.red().to_string()
    });

    lines.push(String::new());
    lines.push("Response headers:".bold().to_string());
    if result.headers().is_empty() {
        lines.push("  (none)".to_string());
    }
    for (name, value) in result.headers() {
        lines.push(format!("  {}: {}", name.cyan(), value));
    }

    lines.join("\n")
}
