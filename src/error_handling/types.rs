//! Error type definitions.
//!
//! Only input errors and an unreachable page stop an audit. Fetch and probe
//! errors are fallible results that the pipeline downgrades into issues.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid scoring or CLI configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Category weights must add up to exactly 100% (1.0).
    #[error("Category weights must sum to {expected}%, got {total}%", expected = crate::config::WEIGHT_TOTAL)]
    WeightSum { total: u64 },

    /// `--weights` value is not four comma-separated integers.
    #[error("Invalid weights '{0}': expected security,performance,seo,accessibility (e.g. 35,30,25,10)")]
    WeightFormat(String),
}

/// Failure of the timed page GET.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },

    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

/// Failure of an auxiliary probe (TLS handshake, robots.txt/sitemap.xml HEAD).
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Invalid server name '{host}': {reason}")]
    InvalidServerName { host: String, reason: String },

    #[error("Failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} timeout for {host} ({timeout_secs}s)")]
    Timeout {
        stage: &'static str,
        host: String,
        timeout_secs: u64,
    },

    #[error("TLS handshake with {host} failed: {source}")]
    Handshake {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TLS configuration error: {0}")]
    TlsConfig(#[from] rustls::Error),

    #[error("Invalid probe URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HEAD {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

/// Errors that end an audit. Everything else degrades a score instead.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Input was empty after trimming; the audit never starts.
    #[error("URL required")]
    EmptyUrl,

    /// Input could not be turned into a fetchable http(s) URL.
    #[error("Invalid URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    /// The page could not be fetched; the only fatal condition once an audit starts.
    #[error("Failed to fetch page.")]
    Unreachable(#[source] FetchError),
}

impl AuditError {
    /// Input errors are the caller's fault (HTTP 400); everything else is a 500.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AuditError::EmptyUrl | AuditError::InvalidUrl { .. })
    }
}
