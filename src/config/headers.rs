//! HTTP header name constants.
//!
//! Names are lowercase, which is how checks are keyed and how response
//! headers are normalized before lookup.

/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-XSS-Protection header
pub const HEADER_X_XSS_PROTECTION: &str = "x-xss-protection";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// X-DNS-Prefetch-Control header
pub const HEADER_X_DNS_PREFETCH_CONTROL: &str = "x-dns-prefetch-control";
/// Cross-Origin-Resource-Policy header (static and uploaded assets)
pub const HEADER_CROSS_ORIGIN_RESOURCE_POLICY: &str = "cross-origin-resource-policy";
/// Access-Control-Allow-Origin header (CORS)
pub const HEADER_ACCESS_CONTROL_ALLOW_ORIGIN: &str = "access-control-allow-origin";

/// CSP sources the analytics integration needs to be allowed.
pub const ANALYTICS_CSP_SOURCES: &[&str] = &[
    "www.googletagmanager.com",
    "www.google-analytics.com",
    "analytics.google.com",
];
