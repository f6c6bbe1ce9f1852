//! Sending audit requests.
//!
//! [`Transport`] is the seam between the auditor and the network.
//! [`HttpTransport`] is the real implementation; tests substitute fakes.

mod http;

use std::future::Future;

use crate::audit::AuditRequest;
use crate::error_handling::AuditError;

pub use http::HttpTransport;

/// A response as received: status code and header pairs in arrival order.
///
/// Header names keep whatever case the transport produced; values that are
/// not valid UTF-8 are converted lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Header name/value pairs, repeated names included
    pub headers: Vec<(String, String)>,
}

/// Sends one request and returns the response status and headers.
///
/// Implementations must not retry and must not read more of the response
/// than the headers require.
pub trait Transport {
    /// Sends `request` and waits for the response headers.
    fn send(
        &self,
        request: &AuditRequest,
    ) -> impl Future<Output = Result<RawResponse, AuditError>> + Send;
}
