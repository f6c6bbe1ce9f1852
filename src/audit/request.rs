//! Audit request construction and target URL normalization.

use log::warn;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AuditError;

/// Where and how to send the audit request.
///
/// Built once through [`AuditRequest::new`] or [`AuditRequest::from_url`]
/// and the `with_*` methods, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    host: String,
    port: u16,
    path: String,
    method: Method,
    use_tls: bool,
    verify_tls_cert: bool,
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl AuditRequest {
    /// Creates a plain-HTTP GET request for `host:port` + `path`.
    ///
    /// A missing leading `/` is added to `path`.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::InvalidRequest` if the resulting URL does not parse.
    pub fn new(host: &str, port: u16, path: &str) -> Result<Self, AuditError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(AuditError::InvalidRequest("host is empty".to_string()));
        }
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let request = Self {
            host: host.to_string(),
            port,
            path,
            method: Method::GET,
            use_tls: false,
            verify_tls_cert: true,
            headers: Vec::new(),
        };
        url::Url::parse(&request.url())
            .map_err(|e| AuditError::InvalidRequest(format!("{}: {e}", request.url())))?;
        Ok(request)
    }

    /// Creates a request from a target URL.
    ///
    /// URLs without a scheme are treated as `http://`, since the usual
    /// target is a local development server. The port defaults to the
    /// scheme's well-known port.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::InvalidRequest` if the URL is too long, invalid,
    /// has no host, or uses a scheme other than http/https.
    pub fn from_url(target: &str) -> Result<Self, AuditError> {
        let target = target.trim();
        if target.len() > MAX_URL_LENGTH {
            return Err(AuditError::InvalidRequest(format!(
                "URL exceeds maximum length ({} > {MAX_URL_LENGTH})",
                target.len()
            )));
        }

        let normalized = if target.contains("://") {
            target.to_string()
        } else {
            format!("http://{target}")
        };

        let parsed = url::Url::parse(&normalized)
            .map_err(|e| AuditError::InvalidRequest(format!("{target}: {e}")))?;
        let use_tls = match parsed.scheme() {
            "http" => false,
            "https" => true,
            other => {
                return Err(AuditError::InvalidRequest(format!(
                    "unsupported scheme {other:?} in {target}"
                )))
            }
        };
        let host = parsed
            .host_str()
            .ok_or_else(|| AuditError::InvalidRequest(format!("{target}: missing host")))?;
        let port = parsed.port_or_known_default().unwrap_or(if use_tls { 443 } else { 80 });
        let path = match parsed.query() {
            Some(query) => format!("{}?{query}", parsed.path()),
            None => parsed.path().to_string(),
        };

        Ok(Self::new(host, port, &path)?.with_tls(use_tls))
    }

    /// Switches between HTTP and HTTPS.
    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Enables or disables certificate chain validation.
    ///
    /// Disabling it is insecure and meant for local development servers with
    /// self-signed certificates.
    pub fn with_tls_verification(mut self, verify_tls_cert: bool) -> Self {
        if !verify_tls_cert {
            warn!(
                "TLS certificate validation disabled for {}; use only against local development servers",
                self.host
            );
        }
        self.verify_tls_cert = verify_tls_cert;
        self
    }

    /// Sets the request method.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::InvalidRequest` if `method` is not a valid token.
    pub fn with_method(mut self, method: &str) -> Result<Self, AuditError> {
        self.method = Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes())
            .map_err(|_| AuditError::InvalidRequest(format!("invalid method {method:?}")))?;
        Ok(self)
    }

    /// Adds a request header, e.g. an `Origin` to trigger CORS responses.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::InvalidRequest` if the name or value is invalid.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, AuditError> {
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|_| AuditError::InvalidRequest(format!("invalid header name {name:?}")))?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|_| AuditError::InvalidRequest(format!("invalid value for header {name}")))?;
        self.headers.push((name, value));
        Ok(self)
    }

    /// Adds a request header given as `"Name: value"`.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::InvalidRequest` if there is no `:` separator or
    /// the name or value is invalid.
    pub fn with_header_line(self, line: &str) -> Result<Self, AuditError> {
        let (name, value) = line.split_once(':').ok_or_else(|| {
            AuditError::InvalidRequest(format!("header {line:?} is not in \"Name: value\" form"))
        })?;
        self.with_header(name, value)
    }

    /// Target host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Target port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Request path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Whether the request uses HTTPS.
    pub fn use_tls(&self) -> bool {
        self.use_tls
    }

    /// Whether certificate chain validation is enabled.
    pub fn verify_tls_cert(&self) -> bool {
        self.verify_tls_cert
    }

    /// Extra request headers, in the order they were added.
    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    /// The full target URL.
    pub fn url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        // IPv6 literals need brackets in the authority.
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("{scheme}://[{}]:{}{}", self.host, self.port, self.path)
        } else {
            format!("{scheme}://{}:{}{}", self.host, self.port, self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let request = AuditRequest::new("localhost", 3000, "api/health").unwrap();
        assert_eq!(request.url(), "http://localhost:3000/api/health");
        assert_eq!(*request.method(), Method::GET);
        assert!(!request.use_tls());
        assert!(request.verify_tls_cert());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        let request = AuditRequest::new("::1", 8080, "/").unwrap();
        assert_eq!(request.url(), "http://[::1]:8080/");
        let request = AuditRequest::from_url("http://[::1]:8080/health").unwrap();
        assert_eq!(request.port(), 8080);
        assert_eq!(request.url(), "http://[::1]:8080/health");
    }

    #[test]
    fn test_new_rejects_empty_host() {
        assert!(matches!(
            AuditRequest::new("  ", 80, "/"),
            Err(AuditError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_from_url_https_default_port() {
        let request = AuditRequest::from_url("https://example.com/uploads/a.png?v=2").unwrap();
        assert!(request.use_tls());
        assert_eq!(request.port(), 443);
        assert_eq!(request.path(), "/uploads/a.png?v=2");
        assert_eq!(request.url(), "https://example.com:443/uploads/a.png?v=2");
    }

    #[test]
    fn test_from_url_without_scheme_is_http() {
        let request = AuditRequest::from_url("localhost:5000").unwrap();
        assert!(!request.use_tls());
        assert_eq!(request.host(), "localhost");
        assert_eq!(request.port(), 5000);
        assert_eq!(request.path(), "/");
    }

    #[test]
    fn test_from_url_rejects_other_schemes() {
        assert!(matches!(
            AuditRequest::from_url("ftp://example.com/"),
            Err(AuditError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_from_url_rejects_overlong_url() {
        let long = format!("http://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(AuditRequest::from_url(&long).is_err());
    }

    #[test]
    fn test_with_method_and_headers() {
        let request = AuditRequest::new("localhost", 3000, "/")
            .unwrap()
            .with_method("head")
            .unwrap()
            .with_header_line("Origin: http://localhost:5173")
            .unwrap();
        assert_eq!(*request.method(), Method::HEAD);
        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.headers()[0].0.as_str(), "origin");
        assert_eq!(request.headers()[0].1, "http://localhost:5173");
    }

    #[test]
    fn test_with_header_line_requires_separator() {
        let request = AuditRequest::new("localhost", 3000, "/").unwrap();
        assert!(request.with_header_line("Origin").is_err());
    }

    #[test]
    fn test_disable_verification() {
        let request = AuditRequest::new("localhost", 3443, "/")
            .unwrap()
            .with_tls(true)
            .with_tls_verification(false);
        assert!(request.use_tls());
        assert!(!request.verify_tls_cert());
    }
}
