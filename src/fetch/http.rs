//! reqwest-backed transport.

use std::time::Duration;

use log::debug;

use super::{RawResponse, Transport};
use crate::audit::AuditRequest;
use crate::error_handling::{categorize_reqwest_error, AuditError};
use crate::initialization::init_client;

/// Sends audit requests with a fresh `reqwest::Client` per request.
///
/// A client per request keeps each audit's connection its own: it is closed
/// as soon as the response headers have been read and the client dropped.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    user_agent: String,
    connect_timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport with the given User-Agent and connect timeout.
    pub fn new(user_agent: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            connect_timeout,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &AuditRequest) -> Result<RawResponse, AuditError> {
        let url = request.url();
        let client = init_client(&self.user_agent, self.connect_timeout, request)?;

        let mut builder = client.request(request.method().clone(), &url);
        for (name, value) in request.headers() {
            builder = builder.header(name.clone(), value.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&url, request.verify_tls_cert(), &e))?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        debug!("{} responded {} with {} headers", url, status, headers.len());

        Ok(RawResponse { status, headers })
    }
}
