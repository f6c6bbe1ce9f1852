//! Error categorization.
//!
//! Maps `reqwest` failures onto the audit error taxonomy by walking the
//! error's source chain.

use std::error::Error as StdError;
use std::io;

use super::types::{AuditError, ConnectionErrorKind};

/// Iterates over an error and all of its causes.
///
/// `io::Error` hides a wrapped custom error from `source()`, so the wrapped
/// error is yielded explicitly after it.
fn causes<'a>(
    error: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(error), |&cause| {
        match cause.downcast_ref::<io::Error>().and_then(|io| io.get_ref()) {
            Some(inner) => Some(inner as &(dyn StdError + 'static)),
            None => cause.source(),
        }
    })
}

/// Renders an error and its causes as a single `": "`-joined line.
///
/// Adjacent duplicates are dropped; wrappers often repeat their inner
/// error's message verbatim.
pub fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in causes(error) {
        let text = cause.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
    }
    parts.join(": ")
}

fn is_connection_refused(error: &(dyn StdError + 'static)) -> bool {
    causes(error).any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io| io.kind() == io::ErrorKind::ConnectionRefused)
    })
}

fn is_certificate_error(error: &(dyn StdError + 'static), message: &str) -> bool {
    let from_rustls = causes(error).any(|cause| {
        matches!(
            cause.downcast_ref::<rustls::Error>(),
            Some(rustls::Error::InvalidCertificate(_) | rustls::Error::NoCertificatesPresented)
        )
    });
    // reqwest may link a different rustls build than ours; fall back to the text.
    from_rustls || message.to_ascii_lowercase().contains("certificate")
}

/// Categorizes a `reqwest::Error` into an [`AuditError`].
///
/// Certificate failures only count as [`AuditError::Tls`] while certificate
/// validation is enabled; with validation off, any TLS failure is a
/// handshake problem and reported as unreachable.
///
/// # Arguments
///
/// * `url` - The URL the request was sent to
/// * `verify_tls_cert` - Whether certificate validation was enabled
/// * `error` - The `reqwest::Error` to categorize
pub fn categorize_reqwest_error(
    url: &str,
    verify_tls_cert: bool,
    error: &reqwest::Error,
) -> AuditError {
    let message = error_chain_message(error);
    let url = url.to_string();

    if error.is_builder() {
        return AuditError::InvalidRequest(message);
    }

    let kind = if error.is_timeout() {
        ConnectionErrorKind::Timeout
    } else if is_connection_refused(error) {
        ConnectionErrorKind::Refused
    } else if verify_tls_cert && error.is_connect() && is_certificate_error(error, &message) {
        return AuditError::Tls { url, message };
    } else {
        ConnectionErrorKind::Unreachable
    };

    AuditError::Connection { url, kind, message }
}
