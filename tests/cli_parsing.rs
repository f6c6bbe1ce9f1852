//! Tests for CLI option parsing.

use clap::Parser;
use header_audit::{build_checklist, build_request, Config, FailOn, LogFormat, LogLevel, Profile};
use std::path::PathBuf;

#[test]
fn test_cli_url_option() {
    let config = Config::try_parse_from([
        "header_audit",
        "--url",
        "https://localhost:3443/uploads/avatar.png",
        "--insecure",
        "--profile",
        "uploads",
    ])
    .expect("Should parse");

    let request = build_request(&config).expect("valid request");
    assert!(request.use_tls());
    assert!(!request.verify_tls_cert());
    assert_eq!(request.port(), 3443);
    assert_eq!(request.path(), "/uploads/avatar.png");
    assert_eq!(build_checklist(&config).unwrap(), Profile::Uploads.checklist());
}

#[test]
fn test_cli_host_port_path() {
    let config = Config::try_parse_from([
        "header_audit",
        "--host",
        "127.0.0.1",
        "--port",
        "5000",
        "--path",
        "/api/health",
        "--tls",
    ])
    .expect("Should parse");

    let request = build_request(&config).expect("valid request");
    assert_eq!(request.url(), "https://127.0.0.1:5000/api/health");
    assert!(request.verify_tls_cert());
}

#[test]
fn test_cli_checklist_timeout_and_logging() {
    let config = Config::try_parse_from([
        "header_audit",
        "--checklist",
        "checks/analytics.json",
        "--timeout-seconds",
        "3",
        "--fail-on",
        "never",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse");

    assert_eq!(config.checklist, Some(PathBuf::from("checks/analytics.json")));
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.fail_on, FailOn::Never);
    assert_eq!(config.log_level, Some(LogLevel::Debug));
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_cli_rejects_invalid_port() {
    assert!(Config::try_parse_from(["header_audit", "--port", "70000"]).is_err());
    assert!(Config::try_parse_from(["header_audit", "--fail-on", "sometimes"]).is_err());
}
