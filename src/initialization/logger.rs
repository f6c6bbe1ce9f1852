//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::{LogFormat, DEFAULT_LOG_LEVEL};
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging. Logs go to stderr,
/// so they never mix with the report on stdout.
///
/// An explicit `level` overrides `RUST_LOG`. Without one, `RUST_LOG` decides
/// when it is set, and warnings and errors are shown otherwise.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show the request and response summary
/// header_audit --log-level debug
///
/// # Per-module filtering via RUST_LOG (leave --log-level unset)
/// RUST_LOG=header_audit=debug,reqwest=debug header_audit
/// ```
pub fn init_logger_with(
    level: Option<LevelFilter>,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let env_filters = std::env::var("RUST_LOG")
        .ok()
        .filter(|filters| !filters.trim().is_empty());
    let mut builder = filter_builder(level, env_filters.as_deref());

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the level filters from an optional explicit level and `RUST_LOG` directives.
fn filter_builder(level: Option<LevelFilter>, env_filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }

    let level = match (level, env_filters) {
        (Some(level), _) => level,
        (None, Some(_)) => return builder,
        (None, None) => DEFAULT_LOG_LEVEL,
    };

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info.min(level));
    builder.filter_module("hyper", LevelFilter::Info.min(level));
    builder.filter_module("hyper_util", LevelFilter::Info.min(level));
    builder.filter_module("rustls", LevelFilter::Warn.min(level));
    builder.filter_module("header_audit", level);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_init_logger_does_not_panic() {
        // env_logger can only be initialized once per process; either outcome is fine
        let _ = init_logger_with(Some(LevelFilter::Info), LogFormat::Plain);
        let second = init_logger_with(Some(LevelFilter::Debug), LogFormat::Json);
        assert!(second.is_err());
    }

    #[test]
    fn test_rust_log_directives_apply_without_explicit_level() {
        let logger = filter_builder(None, Some("header_audit=debug,reqwest=debug")).build();
        assert!(enabled(&logger, "header_audit::audit", Level::Debug));
        assert!(enabled(&logger, "reqwest::connect", Level::Debug));
        assert!(!enabled(&logger, "hyper::proto", Level::Debug));
    }

    #[test]
    fn test_explicit_level_overrides_rust_log() {
        let logger = filter_builder(Some(LevelFilter::Warn), Some("header_audit=debug")).build();
        assert!(!enabled(&logger, "header_audit::audit", Level::Debug));
        assert!(enabled(&logger, "header_audit::audit", Level::Warn));
    }

    #[test]
    fn test_default_level_caps_dependencies() {
        let logger = filter_builder(None, None).build();
        assert!(enabled(&logger, "header_audit", Level::Warn));
        assert!(!enabled(&logger, "header_audit", Level::Info));

        let logger = filter_builder(Some(LevelFilter::Trace), None).build();
        assert!(enabled(&logger, "header_audit::fetch", Level::Trace));
        assert!(!enabled(&logger, "reqwest::connect", Level::Debug));
        assert!(enabled(&logger, "rustls::client", Level::Warn));
        assert!(!enabled(&logger, "rustls::client", Level::Info));
    }
}
