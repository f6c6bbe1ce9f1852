//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `header_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Report output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use header_audit::config::{EXIT_RUN_ERROR, EXIT_SUCCESS};
use header_audit::export::{render_json, render_plain};
use header_audit::initialization::{init_crypto_provider, init_logger_with};
use header_audit::{evaluate_exit_code, run_audit, Config, ReportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so
    // HEADER_AUDIT_HOST / HEADER_AUDIT_PORT / RUST_LOG can live there
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().map(Into::into), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    match run_audit(&config).await {
        Ok(report) => {
            let rendered = match config.format {
                ReportFormat::Plain => render_plain(&report),
                ReportFormat::Json => {
                    render_json(&report).context("Failed to render JSON report")?
                }
            };
            println!("{rendered}");

            let code = evaluate_exit_code(&config.fail_on, &report.result);
            if code != EXIT_SUCCESS {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("header_audit error: {:#}", e);
            process::exit(EXIT_RUN_ERROR);
        }
    }
}
