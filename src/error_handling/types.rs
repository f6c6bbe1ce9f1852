//! Error type definitions.

use std::fmt;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a connection could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionErrorKind {
    /// Nothing is listening on the target port
    Refused,
    /// The host could not be reached, resolved, or the exchange broke off
    Unreachable,
    /// No response arrived within the configured timeout
    Timeout,
}

impl fmt::Display for ConnectionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionErrorKind::Refused => "connection refused",
            ConnectionErrorKind::Unreachable => "unreachable",
            ConnectionErrorKind::Timeout => "timed out",
        })
    }
}

/// Errors that stop an audit from producing a result.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The transport could not establish a connection or timed out.
    #[error("Connection to {url} failed ({kind}): {message}")]
    Connection {
        /// Target URL
        url: String,
        /// Failure category
        kind: ConnectionErrorKind,
        /// Underlying error chain
        message: String,
    },

    /// Certificate validation failed while validation was enabled.
    #[error("TLS certificate validation failed for {url}: {message}")]
    Tls {
        /// Target URL
        url: String,
        /// Underlying error chain
        message: String,
    },

    /// The request could not be built (bad URL, method or header).
    #[error("Invalid audit request: {0}")]
    InvalidRequest(String),

    /// The HTTP client could not be created.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

impl AuditError {
    /// Returns the connection failure category, if this is a connection error.
    pub fn connection_kind(&self) -> Option<ConnectionErrorKind> {
        match self {
            AuditError::Connection { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Errors loading or validating a checklist.
#[derive(Error, Debug)]
pub enum ChecklistError {
    /// The checklist file could not be read.
    #[error("Failed to read checklist {path}: {source}")]
    Io {
        /// Checklist file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The checklist file is not valid checklist JSON.
    #[error("Failed to parse checklist {path}: {source}")]
    Parse {
        /// Checklist file path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A check names something that is not a valid HTTP header name.
    #[error("Invalid header name in checklist: {0:?}")]
    InvalidHeaderName(String),

    /// The checklist contains no checks.
    #[error("Checklist is empty")]
    Empty,
}
