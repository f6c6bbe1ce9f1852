//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_HOST, DEFAULT_METHOD, DEFAULT_PATH, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One line per check followed by the raw header dump
    Plain,
    /// A single JSON document
    Json,
}

/// Exit code policy.
///
/// Decides whether failed checks turn into a non-zero process exit.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the audit ran, whatever the outcomes
    Never,
    /// Exit 2 when any check failed
    AnyFailure,
}

/// Built-in checklists.
///
/// Each one covers the headers a particular kind of endpoint is expected to
/// send. See [`Profile::checklist`] for the contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// The general hardening headers every page should carry
    Baseline,
    /// Baseline plus a CSP that allows the analytics sources
    Analytics,
    /// Headers expected on served uploads and static files
    Uploads,
    /// CORS response headers
    Cors,
    /// Every check above, merged by header
    All,
}

/// Audit configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use header_audit::{Config, Profile};
///
/// let config = Config {
///     port: 8080,
///     path: "/api/health".to_string(),
///     profile: Profile::Cors,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "header_audit",
    version,
    about = "Audit the security headers a running HTTP server returns"
)]
pub struct Config {
    /// Full target URL; overrides --host, --port, --path and --tls
    #[arg(long)]
    pub url: Option<String>,

    /// Host to audit
    #[arg(long, env = "HEADER_AUDIT_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to audit
    #[arg(long, env = "HEADER_AUDIT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Request path
    #[arg(long, default_value = DEFAULT_PATH)]
    pub path: String,

    /// HTTP method (no request body is ever sent)
    #[arg(long, default_value = DEFAULT_METHOD)]
    pub method: String,

    /// Use HTTPS
    #[arg(long)]
    pub tls: bool,

    /// Skip TLS certificate validation (local development only; insecure)
    #[arg(long)]
    pub insecure: bool,

    /// Extra request header as "Name: value" (repeatable), e.g. an Origin for CORS checks
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// Built-in checklist to run
    #[arg(long, value_enum, default_value_t = Profile::Baseline)]
    pub profile: Profile,

    /// JSON checklist file; replaces --profile
    #[arg(long)]
    pub checklist: Option<PathBuf>,

    /// Timeout for the whole request in seconds (at least 1)
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,

    /// When failed checks should produce a non-zero exit code
    #[arg(long, value_enum, default_value_t = FailOn::AnyFailure)]
    pub fail_on: FailOn,

    /// Log level; overrides RUST_LOG, which applies when this is omitted (default: warn)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            method: DEFAULT_METHOD.to_string(),
            tls: false,
            insecure: false,
            headers: Vec::new(),
            profile: Profile::Baseline,
            checklist: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            format: ReportFormat::Plain,
            fail_on: FailOn::AnyFailure,
            log_level: None,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3000);
        assert_eq!(config.path, "/");
        assert_eq!(config.method, "GET");
        assert!(!config.tls);
        assert!(!config.insecure);
        assert_eq!(config.profile, Profile::Baseline);
        assert_eq!(config.fail_on, FailOn::AnyFailure);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_parse_without_arguments_matches_default() {
        let parsed = Config::try_parse_from(["header_audit"]).expect("no arguments should parse");
        let default = Config::default();
        assert_eq!(parsed.url, default.url);
        assert_eq!(parsed.path, default.path);
        assert_eq!(parsed.method, default.method);
        assert_eq!(parsed.profile, default.profile);
        assert_eq!(parsed.fail_on, default.fail_on);
        assert_eq!(parsed.format, default.format);
        assert_eq!(parsed.user_agent, default.user_agent);
        assert_eq!(parsed.log_level, None);
    }

    #[test]
    fn test_parse_rejects_zero_timeout() {
        assert!(Config::try_parse_from(["header_audit", "--timeout-seconds", "0"]).is_err());
        let parsed = Config::try_parse_from(["header_audit", "--timeout-seconds", "1"])
            .expect("one second is a valid timeout");
        assert_eq!(parsed.timeout_seconds, 1);
    }

    #[test]
    fn test_parse_repeated_headers() {
        let parsed = Config::try_parse_from([
            "header_audit",
            "-H",
            "Origin: http://localhost:5173",
            "--header",
            "X-Debug: 1",
        ])
        .expect("headers should parse");
        assert_eq!(
            parsed.headers,
            vec!["Origin: http://localhost:5173", "X-Debug: 1"]
        );
    }

    #[test]
    fn test_parse_value_enums() {
        let parsed = Config::try_parse_from([
            "header_audit",
            "--profile",
            "analytics",
            "--fail-on",
            "never",
            "--format",
            "json",
        ])
        .expect("value enums should parse");
        assert_eq!(parsed.profile, Profile::Analytics);
        assert_eq!(parsed.fail_on, FailOn::Never);
        assert_eq!(parsed.format, ReportFormat::Json);
    }

    #[test]
    fn test_parse_rejects_unknown_profile() {
        assert!(Config::try_parse_from(["header_audit", "--profile", "helmet"]).is_err());
    }
}
