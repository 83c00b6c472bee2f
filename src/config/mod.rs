//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, scoring penalties)
//! - HTTP header name constants
//! - CLI option types and parsing
//! - The validated scoring configuration (weights, rounding, grades)

mod constants;
mod headers;
mod scoring;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use scoring::{Grade, RoundingMode, ScoringConfig, Weights, GRADE_THRESHOLDS, WEIGHT_TOTAL};
pub use types::{Config, LogFormat, LogLevel};
