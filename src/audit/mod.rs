//! Security header auditing.
//!
//! This module sends one request to an endpoint and checks the response's
//! headers against a checklist:
//! - [`AuditRequest`]: the endpoint and request settings
//! - [`evaluate`]: pure checklist evaluation over a received response
//! - [`HeaderAuditor`]: sends the request through a [`Transport`] under a
//!   timeout, then evaluates
//!
//! Missing headers are ordinary failed outcomes. Only failing to obtain a
//! response is an error, and it is never retried.

mod analysis;
mod request;
mod result;

use std::time::Duration;

use log::{debug, info};

use crate::checklist::HeaderCheck;
use crate::error_handling::{AuditError, ConnectionErrorKind};
use crate::fetch::Transport;

pub use analysis::evaluate;
pub use request::AuditRequest;
pub use result::{AuditResult, CheckOutcome};

/// Audits endpoints through a transport.
pub struct HeaderAuditor<T> {
    transport: T,
    timeout: Duration,
}

impl<T: Transport> HeaderAuditor<T> {
    /// Creates an auditor whose requests are bounded by `timeout`.
    pub fn new(transport: T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Sends `request` once and evaluates `checklist` against the response.
    ///
    /// When the timeout expires the pending request is dropped, which
    /// closes its connection.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::Connection` when no response could be obtained
    /// (including timeouts) and `AuditError::Tls` when certificate
    /// validation failed.
    pub async fn audit(
        &self,
        request: &AuditRequest,
        checklist: &[HeaderCheck],
    ) -> Result<AuditResult, AuditError> {
        let url = request.url();
        debug!("Sending {} {} ({} checks)", request.method(), url, checklist.len());

        let response = match tokio::time::timeout(self.timeout, self.transport.send(request)).await
        {
            Ok(response) => response?,
            Err(_) => {
                return Err(AuditError::Connection {
                    url,
                    kind: ConnectionErrorKind::Timeout,
                    message: format!("no response within {:.1}s", self.timeout.as_secs_f64()),
                })
            }
        };

        let result = evaluate(&response, checklist);
        info!(
            "{} returned {}: {}/{} checks passed",
            url,
            result.status_code(),
            result.passed_count(),
            result.outcomes().len()
        );
        Ok(result)
    }
}
