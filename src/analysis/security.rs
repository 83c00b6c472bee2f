//! Security analysis: TLS validity, security headers, cookie flags.

use log::debug;
use serde::{Serialize, Serializer};

use super::{clamp_score, AnalysisOutcome, Issue};
use crate::config::{
    INSECURE_COOKIE_PENALTY, INVALID_TLS_PENALTY, MISSING_HEADER_PENALTY, SECURITY_BASE_SCORE,
    SECURITY_HEADERS,
};
use crate::fetch::FetchResult;
use crate::signals::PhishingRisk;
use crate::tls::TlsProbeResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityMetrics {
    pub ssl_valid: bool,
    pub ssl_error: Option<String>,
    /// Header name → present, in check order. Empty when the page was not fetched.
    #[serde(serialize_with = "ordered_map")]
    pub security_headers: Vec<(String, bool)>,
    /// Advisory only; never affects the score
    pub phishing_risk: PhishingRisk,
}

fn ordered_map<S: Serializer>(
    entries: &[(String, bool)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(name, present)| (name, present)))
}

/// Scores transport and header hygiene.
///
/// Without a fetch result the score is 0 with a single issue, whatever the TLS
/// outcome.
pub fn analyze_security(
    fetch: Option<&FetchResult>,
    tls: &TlsProbeResult,
    phishing_risk: PhishingRisk,
) -> AnalysisOutcome<SecurityMetrics> {
    let mut metrics = SecurityMetrics {
        ssl_valid: tls.valid,
        ssl_error: tls.error.clone(),
        security_headers: Vec::new(),
        phishing_risk,
    };

    let Some(fetch) = fetch else {
        return AnalysisOutcome {
            metrics,
            score: 0,
            issues: vec![Issue::minor("Could not fetch page for security analysis.")],
        };
    };

    let mut score = SECURITY_BASE_SCORE;
    let mut issues = Vec::new();

    if !tls.valid {
        score -= INVALID_TLS_PENALTY;
        issues.push(Issue::critical("Invalid SSL/TLS certificate."));
    }

    for &header in SECURITY_HEADERS {
        let present = fetch.has_header(header);
        if !present {
            score -= MISSING_HEADER_PENALTY;
            issues.push(Issue::critical(format!("Missing {header} header.")));
        }
        metrics.security_headers.push((header.to_string(), present));
    }

    if let Some(cookies) = fetch
        .joined_header(reqwest::header::SET_COOKIE.as_str())
        .filter(|value| !value.is_empty())
    {
        let lowered = cookies.to_lowercase();
        if !lowered.contains("secure") {
            score -= INSECURE_COOKIE_PENALTY;
            issues.push(Issue::minor("Cookies missing Secure flag."));
        }
        if !lowered.contains("httponly") {
            score -= INSECURE_COOKIE_PENALTY;
            issues.push(Issue::minor("Cookies missing HttpOnly flag."));
        }
    }

    debug!("Security score {score} with {} issues", issues.len());
    AnalysisOutcome {
        metrics,
        score: clamp_score(score),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue, SET_COOKIE};

    fn fetch_with(headers: HeaderMap) -> FetchResult {
        FetchResult {
            status: 200,
            headers,
            body: b"<html></html>".to_vec(),
            elapsed_secs: Some(0.3),
        }
    }

    fn all_security_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        for &name in SECURITY_HEADERS {
            let name = HeaderName::from_bytes(name.as_bytes()).unwrap();
            headers.insert(name, HeaderValue::from_static("x"));
        }
        headers
    }

    #[test]
    fn test_invalid_tls_with_all_headers() {
        let fetch = fetch_with(all_security_headers());
        let tls = TlsProbeResult::invalid("certificate expired");
        let outcome = analyze_security(Some(&fetch), &tls, PhishingRisk::Low);

        assert_eq!(outcome.score, 60);
        assert_eq!(outcome.issues, vec![Issue::critical("Invalid SSL/TLS certificate.")]);
        assert!(!outcome.metrics.ssl_valid);
        assert_eq!(outcome.metrics.ssl_error.as_deref(), Some("certificate expired"));
        assert!(outcome.metrics.security_headers.iter().all(|(_, present)| *present));
    }

    #[test]
    fn test_no_fetch_scores_zero_with_single_issue() {
        for tls in [TlsProbeResult::valid(), TlsProbeResult::invalid("refused")] {
            let outcome = analyze_security(None, &tls, PhishingRisk::Low);
            assert_eq!(outcome.score, 0);
            assert_eq!(outcome.issues.len(), 1);
            assert_eq!(
                outcome.issues[0].message,
                "Could not fetch page for security analysis."
            );
            assert!(outcome.metrics.security_headers.is_empty());
        }
    }

    #[test]
    fn test_missing_headers_reported_in_order() {
        let mut headers = HeaderMap::new();
        headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
        headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
        let outcome = analyze_security(
            Some(&fetch_with(headers)),
            &TlsProbeResult::valid(),
            PhishingRisk::Low,
        );

        assert_eq!(outcome.score, 60);
        let messages: Vec<&str> = outcome.issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Missing Content-Security-Policy header.",
                "Missing Strict-Transport-Security header.",
                "Missing X-Content-Type-Options header.",
                "Missing Permissions-Policy header.",
            ]
        );
        assert!(outcome.issues.iter().all(Issue::is_critical));
    }

    #[test]
    fn test_cookie_flags() {
        let mut headers = all_security_headers();
        headers.append(SET_COOKIE, HeaderValue::from_static("session=abc; Path=/"));
        headers.append(SET_COOKIE, HeaderValue::from_static("pref=1; HttpOnly"));
        let outcome = analyze_security(
            Some(&fetch_with(headers)),
            &TlsProbeResult::valid(),
            PhishingRisk::Low,
        );

        assert_eq!(outcome.score, 90);
        assert_eq!(outcome.issues, vec![Issue::minor("Cookies missing Secure flag.")]);
    }

    #[test]
    fn test_cookie_flags_both_missing() {
        let mut headers = all_security_headers();
        headers.insert(SET_COOKIE, HeaderValue::from_static("id=1"));
        let outcome = analyze_security(
            Some(&fetch_with(headers)),
            &TlsProbeResult::valid(),
            PhishingRisk::High,
        );
        assert_eq!(outcome.score, 80);
        assert_eq!(outcome.issues.len(), 2);
        assert_eq!(outcome.metrics.phishing_risk, PhishingRisk::High);
    }

    #[test]
    fn test_score_floor_is_zero() {
        let mut headers = HeaderMap::new();
        headers.insert(SET_COOKIE, HeaderValue::from_static("id=1"));
        let outcome = analyze_security(
            Some(&fetch_with(headers)),
            &TlsProbeResult::invalid("bad"),
            PhishingRisk::Low,
        );
        // 100 - 40 - 60 - 20
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.issues.len(), 9);
    }

    #[test]
    fn test_serialized_shape() {
        let outcome = analyze_security(
            Some(&fetch_with(all_security_headers())),
            &TlsProbeResult::valid(),
            PhishingRisk::Low,
        );
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["score"], 100);
        assert_eq!(value["ssl_valid"], true);
        assert!(value["ssl_error"].is_null());
        assert_eq!(value["phishing_risk"], "LOW RISK");
        assert_eq!(value["security_headers"]["X-Frame-Options"], true);
        assert_eq!(value["issues"], serde_json::json!([]));
    }
}
