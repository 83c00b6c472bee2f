//! HTTP header name constants.
//!
//! Security headers every audited page is expected to send.

/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "Permissions-Policy";

/// Security headers checked by the security analyzer, in reporting order.
/// Each missing header costs the same penalty and produces one issue.
pub const SECURITY_HEADERS: &[&str] = &[
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_X_FRAME_OPTIONS,
    HEADER_REFERRER_POLICY,
    HEADER_PERMISSIONS_POLICY,
];
