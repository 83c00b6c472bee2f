//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    AUDIT_TIMEOUT, DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS,
    SITE_FILE_TIMEOUT_SECS,
};
use crate::config::scoring::{RoundingMode, ScoringConfig, Weights};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Audit configuration, parsed from the command line (and `WEBPULSE_*` env vars).
///
/// Can also be constructed programmatically via `Default`:
///
/// ```no_run
/// use webpulse::Config;
///
/// let config = Config {
///     url: Some("example.com".to_string()),
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "webpulse", version, about)]
pub struct Config {
    /// URL to audit (scheme optional, https:// is assumed)
    #[arg(required_unless_present = "serve")]
    pub url: Option<String>,

    /// Serve `POST /audit` on this port instead of auditing a single URL
    #[arg(
        long,
        env = "WEBPULSE_PORT",
        num_args = 0..=1,
        default_missing_value = "5000" // must match DEFAULT_SERVER_PORT
    )]
    pub serve: Option<u16>,

    /// Address the HTTP server binds to
    #[arg(long, default_value = "127.0.0.1", env = "WEBPULSE_BIND")]
    pub bind: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Timeout in seconds for the TLS handshake and robots.txt/sitemap.xml probes
    #[arg(long, default_value_t = SITE_FILE_TIMEOUT_SECS)]
    pub probe_timeout_seconds: u64,

    /// Upper bound in seconds on one whole audit when serving
    #[arg(long, default_value_t = AUDIT_TIMEOUT.as_secs())]
    pub audit_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "WEBPULSE_USER_AGENT")]
    pub user_agent: String,

    /// Category weights in percent: security,performance,seo,accessibility (must sum to 100)
    #[arg(long, default_value = "35,30,25,10")]
    pub weights: Weights,

    /// Rounding rule for the overall score at the .5 boundary
    #[arg(long, value_enum, default_value_t = RoundingMode::HalfUp)]
    pub rounding: RoundingMode,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            serve: None,
            bind: "127.0.0.1".to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: FETCH_TIMEOUT_SECS,
            probe_timeout_seconds: SITE_FILE_TIMEOUT_SECS,
            audit_timeout_seconds: AUDIT_TIMEOUT.as_secs(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            weights: Weights::default(),
            rounding: RoundingMode::HalfUp,
            pretty: false,
        }
    }
}

impl Config {
    /// Builds and validates the scoring configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WeightSum` if the weights do not sum to 100%.
    pub fn scoring(&self) -> Result<ScoringConfig, ConfigError> {
        ScoringConfig::new(self.weights, self.rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.probe_timeout_seconds, 5);
        assert_eq!(config.audit_timeout_seconds, 45);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.weights, Weights::default());
        assert_eq!(config.rounding, RoundingMode::HalfUp);
        assert!(config.serve.is_none());
        assert!(config.scoring().is_ok());
    }

    #[test]
    fn test_parse_single_url() {
        let config = Config::try_parse_from(["webpulse", "example.com"]).unwrap();
        assert_eq!(config.url.as_deref(), Some("example.com"));
        assert_eq!(config.weights, Weights::default());
    }

    #[test]
    fn test_parse_requires_url_without_serve() {
        assert!(Config::try_parse_from(["webpulse"]).is_err());
        let config = Config::try_parse_from(["webpulse", "--serve", "8080"]).unwrap();
        assert_eq!(config.serve, Some(8080));
        assert!(config.url.is_none());
    }

    #[test]
    fn test_parse_bare_serve_uses_default_port() {
        let config = Config::try_parse_from(["webpulse", "--serve"]).unwrap();
        assert_eq!(config.serve, Some(DEFAULT_SERVER_PORT));
    }

    #[test]
    fn test_parse_custom_weights_are_validated_at_load() {
        let config =
            Config::try_parse_from(["webpulse", "example.com", "--weights", "40,30,20,20"])
                .unwrap();
        assert!(matches!(
            config.scoring(),
            Err(ConfigError::WeightSum { total: 110 })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_weights() {
        assert!(Config::try_parse_from(["webpulse", "example.com", "--weights", "35,30"]).is_err());
        assert!(
            Config::try_parse_from(["webpulse", "example.com", "--weights", "a,b,c,d"]).is_err()
        );
    }
}
