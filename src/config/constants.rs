//! Configuration constants.
//!
//! Timeouts, limits, and scoring thresholds used throughout the audit engine.
//! Values that callers may tune are mirrored as defaults in [`Config`](super::Config).

use std::time::Duration;

/// Maximum URL length (2048 characters).
/// Matches common browser and server limits; longer inputs are rejected before the audit starts.
pub const MAX_URL_LENGTH: usize = 2048;

// Network operation timeouts
/// TCP connection timeout for the TLS probe in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Page fetch timeout in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 15;
/// TLS handshake and robots.txt / sitemap.xml HEAD probe timeout in seconds
pub const SITE_FILE_TIMEOUT_SECS: u64 = 5;
/// Whole-audit timeout applied by the HTTP shim.
/// TLS (5s + 5s) + fetch (15s) + two site-file probes (5s each) + buffer
pub const AUDIT_TIMEOUT: Duration = Duration::from_secs(45);

/// Port the TLS probe connects to.
pub const HTTPS_PORT: u16 = 443;

/// Identifying User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "WebPulse360/1.0 (+https://webpulse360.com)";

/// Default bind port for `--serve`.
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// Site file paths probed for SEO
pub const ROBOTS_TXT_PATH: &str = "/robots.txt";
pub const SITEMAP_XML_PATH: &str = "/sitemap.xml";

// Security scoring
pub const SECURITY_BASE_SCORE: i32 = 100;
pub const INVALID_TLS_PENALTY: i32 = 40;
pub const MISSING_HEADER_PENALTY: i32 = 10;
pub const INSECURE_COOKIE_PENALTY: i32 = 10;
/// Probability that the phishing advisory stub reports high risk.
pub const PHISHING_HIGH_RISK_PROBABILITY: f64 = 0.1;

// Performance scoring
pub const LCP_LIMIT_SECS: f64 = 2.5;
pub const LCP_PENALTY: i32 = 20;
pub const FCP_LIMIT_SECS: f64 = 1.8;
pub const FCP_PENALTY: i32 = 15;
pub const CLS_LIMIT: f64 = 0.1;
pub const CLS_PENALTY: i32 = 10;
pub const MISSING_LOAD_TIME_PENALTY: i32 = 20;
pub const VERY_SLOW_LOAD_SECS: f64 = 6.0;
pub const VERY_SLOW_LOAD_PENALTY: i32 = 45;
pub const SLOW_LOAD_SECS: f64 = 4.0;
pub const SLOW_LOAD_PENALTY: i32 = 30;
pub const MODERATE_LOAD_SECS: f64 = 2.0;
pub const MODERATE_LOAD_PENALTY: i32 = 15;
pub const VERY_LARGE_PAGE_KB: f64 = 4096.0;
pub const VERY_LARGE_PAGE_PENALTY: i32 = 30;
pub const LARGE_PAGE_KB: f64 = 2048.0;
pub const LARGE_PAGE_PENALTY: i32 = 20;
pub const MEDIUM_PAGE_KB: f64 = 1024.0;
pub const MEDIUM_PAGE_PENALTY: i32 = 10;
/// Simulated CLS upper bound
pub const CLS_SIMULATION_MAX: f64 = 0.25;

// SEO scoring
pub const TITLE_PRESENT_POINTS: i32 = 20;
pub const TITLE_LENGTH_POINTS: i32 = 10;
pub const TITLE_MIN_CHARS: usize = 10;
pub const TITLE_MAX_CHARS: usize = 70;
pub const DESCRIPTION_PRESENT_POINTS: i32 = 20;
pub const DESCRIPTION_LENGTH_POINTS: i32 = 10;
pub const DESCRIPTION_MIN_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const SINGLE_H1_POINTS: i32 = 10;
pub const MISSING_OPEN_GRAPH_PENALTY: i32 = 20;

// Accessibility scoring
pub const ACCESSIBILITY_BASE_SCORE: f64 = 100.0;
pub const MISSING_ALT_MAX_PENALTY: f64 = 30.0;
pub const MISSING_H1_PENALTY: f64 = 10.0;
pub const MISSING_LANG_PENALTY: f64 = 10.0;
pub const EMPTY_LINK_MAX_PENALTY: f64 = 10.0;
