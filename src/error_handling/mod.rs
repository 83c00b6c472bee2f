//! Error handling.
//!
//! Errors are categorized into:
//! - **Input errors**: empty or malformed URL, rejected before the audit starts
//! - **Unreachable page**: the page fetch failed, the audit fails as a whole
//! - **Degradations**: TLS, site-file, and timing failures that analyzers absorb as issues

mod types;

// Re-export public API
pub use types::{AuditError, ConfigError, FetchError, InitializationError, ProbeError};
