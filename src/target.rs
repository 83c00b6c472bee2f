//! URL normalization and audit target derivation.

use log::warn;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AuditError;

/// Normalized URL plus the host the TLS probe connects to.
///
/// Derived once per audit and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditTarget {
    url: String,
    host: String,
}

impl AuditTarget {
    /// Normalizes free-text input. Never fails.
    ///
    /// The input is trimmed and `https://` is prepended unless it already starts
    /// with `http://` or `https://`. The host is taken from the parsed URL
    /// (without port); if parsing fails the raw input is used as the host.
    pub fn from_input(raw: &str) -> Self {
        let url = normalize_url(raw);
        let host = hostname_from_url(&url).unwrap_or_else(|| raw.trim().to_string());
        Self { url, host }
    }

    /// Normalizes input and rejects anything that cannot be audited.
    ///
    /// # Errors
    ///
    /// - `AuditError::EmptyUrl` if the trimmed input is empty
    /// - `AuditError::InvalidUrl` if the input is too long, or the normalized URL
    ///   is not an http(s) URL with a host
    pub fn parse(raw: &str) -> Result<Self, AuditError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AuditError::EmptyUrl);
        }

        if trimmed.len() > MAX_URL_LENGTH {
            warn!(
                "Rejecting URL exceeding maximum length ({} > {}): {}...",
                trimmed.len(),
                MAX_URL_LENGTH,
                trimmed.chars().take(50).collect::<String>()
            );
            return Err(AuditError::InvalidUrl {
                input: trimmed.chars().take(50).collect(),
                reason: format!("longer than {MAX_URL_LENGTH} characters"),
            });
        }

        let target = Self::from_input(trimmed);
        match url::Url::parse(&target.url) {
            Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(target),
            Ok(_) => Err(AuditError::InvalidUrl {
                input: trimmed.to_string(),
                reason: "missing host".to_string(),
            }),
            Err(e) => Err(AuditError::InvalidUrl {
                input: trimmed.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Prepends `https://` when the input carries no http(s) scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

fn hostname_from_url(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()?
        .host_str()
        .filter(|host| !host.is_empty())
        // IPv6 hosts come back bracketed; the TLS probe wants the bare address
        .map(|host| host.trim_start_matches('[').trim_end_matches(']').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com/path  "), "https://example.com/path");
    }

    #[test]
    fn test_normalize_preserves_scheme() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_url(""), "https://");
        assert_eq!(normalize_url("   "), "https://");
    }

    #[test]
    fn test_target_host_excludes_port() {
        let target = AuditTarget::from_input("example.com:8443/login");
        assert_eq!(target.url(), "https://example.com:8443/login");
        assert_eq!(target.host(), "example.com");
    }

    #[test]
    fn test_target_ipv6_host() {
        let target = AuditTarget::from_input("[2001:db8::1]");
        assert_eq!(target.url(), "https://[2001:db8::1]");
        assert_eq!(target.host(), "2001:db8::1");
    }

    #[test]
    fn test_target_falls_back_to_raw_host() {
        let target = AuditTarget::from_input("not a url at all");
        assert_eq!(target.url(), "https://not a url at all");
        assert_eq!(target.host(), "not a url at all");
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(AuditTarget::parse(""), Err(AuditError::EmptyUrl)));
        assert!(matches!(AuditTarget::parse("  \t"), Err(AuditError::EmptyUrl)));
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert!(matches!(
            AuditTarget::parse("not a valid url!!!"),
            Err(AuditError::InvalidUrl { .. })
        ));
        assert!(matches!(
            AuditTarget::parse("https://"),
            Err(AuditError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_overlong_input() {
        let long = format!("example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            AuditTarget::parse(&long),
            Err(AuditError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_accepts_bare_domain() {
        let target = AuditTarget::parse("example.com").unwrap();
        assert_eq!(target.url(), "https://example.com");
        assert_eq!(target.host(), "example.com");
    }
}
