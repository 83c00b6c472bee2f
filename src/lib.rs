//! webpulse library: single-page web audit engine
//!
//! This library audits one web page on demand. It probes the host's TLS
//! certificate, fetches the page, and scores it in four categories (security,
//! performance, SEO, accessibility), then combines the scores into an overall
//! score and letter grade with a list of human-readable issues.
//!
//! # Example
//!
//! ```no_run
//! use webpulse::{Auditor, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("example.com".to_string()),
//!     ..Default::default()
//! };
//!
//! let auditor = Auditor::from_config(&config)?;
//! let report = auditor.audit("example.com").await?;
//! println!(
//!     "{}: {} ({}), {} critical issues",
//!     report.url, report.overall.score, report.overall.grade, report.issues_count.critical
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Web vitals are simulated from the measured load time, not measured in a
//! browser. Swap in [`FixedSignals`] for deterministic reports.
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod aggregate;
pub mod analysis;
mod audit;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod report;
pub mod server;
mod signals;
mod target;
pub mod tls;
mod utils;

// Re-export public API
pub use audit::Auditor;
pub use config::{Config, Grade, LogFormat, LogLevel, RoundingMode, ScoringConfig, Weights};
pub use error_handling::{AuditError, ConfigError, FetchError, InitializationError, ProbeError};
pub use report::{AuditArtifacts, AuditReport};
pub use signals::{FixedSignals, PhishingRisk, RandomSignals, SignalSource, WebVitals};
pub use target::{normalize_url, AuditTarget};
