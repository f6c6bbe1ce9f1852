//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::audit::AuditRequest;
use crate::error_handling::InitializationError;

/// Initializes an HTTP client for a single audit request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header
/// - Connect timeout (the overall bound is applied by the auditor)
/// - Redirects disabled, so the addressed endpoint's own headers are audited
/// - Rustls TLS backend
/// - Certificate validation as requested; off only on explicit opt-in
///
/// # Arguments
///
/// * `user_agent` - User-Agent header value
/// * `connect_timeout` - Maximum time to establish the connection
/// * `request` - The audit request, for its TLS verification setting
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    user_agent: &str,
    connect_timeout: Duration,
    request: &AuditRequest,
) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(connect_timeout)
        .pool_max_idle_per_host(0)
        .user_agent(user_agent)
        .danger_accept_invalid_certs(!request.verify_tls_cert())
        .build()?;
    Ok(client)
}
