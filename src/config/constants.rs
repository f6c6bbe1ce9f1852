//! Configuration constants.
//!
//! This module defines the defaults and limits used throughout the application.

/// Host audited when neither `--host` nor `--url` is given.
pub const DEFAULT_HOST: &str = "localhost";
/// Port audited when neither `--port` nor `--url` is given.
pub const DEFAULT_PORT: u16 = 3000;
/// Request path audited by default.
pub const DEFAULT_PATH: &str = "/";
/// Request method used by default.
pub const DEFAULT_METHOD: &str = "GET";

/// Bound on the whole request (connect, TLS handshake and response headers), in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Log level used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

/// Default User-Agent string for audit requests.
///
/// Identifies the tool honestly; servers under audit are our own.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Maximum target URL length (2048 characters), matching common server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Separator used when a response repeats a header.
pub const HEADER_VALUE_SEPARATOR: &str = ", ";

// Process exit codes
/// Every check passed (or the fail-on policy ignored failures).
pub const EXIT_SUCCESS: i32 = 0;
/// The audit could not run: connection, TLS, configuration or checklist error.
pub const EXIT_RUN_ERROR: i32 = 1;
/// The audit ran and at least one check failed.
pub const EXIT_CHECKS_FAILED: i32 = 2;
