//! header_audit library: security header verification for live HTTP endpoints
//!
//! This library sends a single request to a running server and checks the
//! response headers against a checklist: which security headers must be
//! present, and which literal fragments (CSP sources, for instance) their
//! values must contain. Missing headers are reported as failed checks, never
//! as errors; only failing to get a response at all is an error.
//!
//! # Example
//!
//! ```no_run
//! use header_audit::{run_audit, Config, Profile};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     profile: Profile::Analytics,
//!     ..Default::default()
//! };
//!
//! let report = run_audit(&config).await?;
//! println!(
//!     "{}/{} checks passed",
//!     report.result.passed_count(),
//!     report.result.outcomes().len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! To audit without a network (or against something other than HTTP),
//! implement [`Transport`] and drive a [`HeaderAuditor`] directly.
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod audit;
pub mod checklist;
pub mod config;
mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;

// Re-export public API
pub use audit::{evaluate, AuditRequest, AuditResult, CheckOutcome, HeaderAuditor};
pub use checklist::{load_checklist, HeaderCheck};
pub use config::{Config, FailOn, LogFormat, LogLevel, Profile, ReportFormat};
pub use error_handling::{AuditError, ChecklistError, ConnectionErrorKind, InitializationError};
pub use fetch::{HttpTransport, RawResponse, Transport};
pub use run::{build_checklist, build_request, evaluate_exit_code, run_audit, AuditReport};

// Internal run module (wires configuration to the auditor)
mod run {
    use std::time::{Duration, Instant};

    use anyhow::{ensure, Context, Result};
    use log::info;

    use crate::audit::{AuditRequest, AuditResult, HeaderAuditor};
    use crate::checklist::{load_checklist, HeaderCheck};
    use crate::config::{Config, FailOn, EXIT_CHECKS_FAILED, EXIT_SUCCESS};
    use crate::error_handling::{AuditError, ChecklistError};
    use crate::fetch::HttpTransport;

    /// Result of one audit run.
    #[derive(Debug, Clone)]
    pub struct AuditReport {
        /// The URL that was audited
        pub url: String,
        /// The request method used
        pub method: String,
        /// Status, headers and check outcomes
        pub result: AuditResult,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Builds the audit request described by `config`.
    ///
    /// `config.url`, when set, replaces host, port, path and TLS settings.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::InvalidRequest` for a malformed URL, host,
    /// method or header.
    pub fn build_request(config: &Config) -> Result<AuditRequest, AuditError> {
        let mut request = match config.url.as_deref() {
            Some(url) => AuditRequest::from_url(url)?,
            None => AuditRequest::new(&config.host, config.port, &config.path)?
                .with_tls(config.tls),
        };
        if config.insecure {
            request = request.with_tls_verification(false);
        }
        request = request.with_method(&config.method)?;
        for line in &config.headers {
            request = request.with_header_line(line)?;
        }
        Ok(request)
    }

    /// Returns the checklist described by `config`.
    ///
    /// A checklist file, when given, replaces the profile.
    ///
    /// # Errors
    ///
    /// Returns a `ChecklistError` if the checklist file cannot be loaded.
    pub fn build_checklist(config: &Config) -> Result<Vec<HeaderCheck>, ChecklistError> {
        match config.checklist.as_deref() {
            Some(path) => load_checklist(path),
            None => Ok(config.profile.checklist()),
        }
    }

    /// Maps an audit result to a process exit code under `fail_on`.
    pub fn evaluate_exit_code(fail_on: &FailOn, result: &AuditResult) -> i32 {
        match fail_on {
            FailOn::Never => EXIT_SUCCESS,
            FailOn::AnyFailure => {
                if result.all_passed() {
                    EXIT_SUCCESS
                } else {
                    EXIT_CHECKS_FAILED
                }
            }
        }
    }

    /// Runs an audit with the provided configuration.
    ///
    /// This is the main entry point for the library. It builds the request
    /// and checklist from `config`, sends the request once over HTTP(S), and
    /// evaluates the response.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The request or checklist configuration is invalid
    /// - The timeout is zero
    /// - The server cannot be reached or does not answer in time
    /// - Certificate validation fails while enabled
    pub async fn run_audit(config: &Config) -> Result<AuditReport> {
        let request = build_request(config).context("Failed to build audit request")?;
        let checklist = build_checklist(config).context("Failed to load checklist")?;
        ensure!(
            config.timeout_seconds > 0,
            "Timeout must be at least one second"
        );

        let timeout = Duration::from_secs(config.timeout_seconds);
        let auditor = HeaderAuditor::new(HttpTransport::new(&config.user_agent, timeout), timeout);

        info!(
            "Auditing {} {} against {} checks",
            request.method(),
            request.url(),
            checklist.len()
        );
        let start_time = Instant::now();
        let result = auditor
            .audit(&request, &checklist)
            .await
            .context("Audit request failed")?;

        Ok(AuditReport {
            url: request.url(),
            method: request.method().to_string(),
            result,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::config::Profile;
        use std::io::Write;

        #[test]
        fn test_build_request_from_parts() {
            let config = Config {
                host: "127.0.0.1".to_string(),
                port: 5000,
                path: "/uploads/logo.png".to_string(),
                tls: true,
                insecure: true,
                method: "head".to_string(),
                headers: vec!["Origin: http://localhost:5173".to_string()],
                ..Default::default()
            };
            let request = build_request(&config).unwrap();
            assert_eq!(request.url(), "https://127.0.0.1:5000/uploads/logo.png");
            assert!(!request.verify_tls_cert());
            assert_eq!(request.method().as_str(), "HEAD");
            assert_eq!(request.headers().len(), 1);
        }

        #[test]
        fn test_build_request_url_overrides_parts() {
            let config = Config {
                url: Some("https://staging.example.com/api/health".to_string()),
                port: 5000,
                ..Default::default()
            };
            let request = build_request(&config).unwrap();
            assert_eq!(request.url(), "https://staging.example.com:443/api/health");
            assert!(request.verify_tls_cert());
        }

        #[test]
        fn test_build_request_rejects_bad_header() {
            let config = Config {
                headers: vec!["no separator".to_string()],
                ..Default::default()
            };
            assert!(matches!(
                build_request(&config),
                Err(AuditError::InvalidRequest(_))
            ));
        }

        #[test]
        fn test_build_checklist_prefers_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            write!(file, r#"[{{"key": "x-powered-by", "label": "leak"}}]"#).unwrap();
            let config = Config {
                checklist: Some(file.path().to_path_buf()),
                profile: Profile::All,
                ..Default::default()
            };
            let checklist = build_checklist(&config).unwrap();
            assert_eq!(checklist.len(), 1);
            assert_eq!(checklist[0].key(), "x-powered-by");
        }

        #[tokio::test]
        async fn test_run_audit_rejects_zero_timeout() {
            let config = Config {
                timeout_seconds: 0,
                ..Default::default()
            };
            let err = run_audit(&config).await.unwrap_err();
            assert!(err.to_string().contains("at least one second"));
        }

        #[test]
        fn test_build_checklist_uses_profile() {
            let config = Config {
                profile: Profile::Cors,
                ..Default::default()
            };
            assert_eq!(
                build_checklist(&config).unwrap(),
                Profile::Cors.checklist()
            );
        }
    }
}
