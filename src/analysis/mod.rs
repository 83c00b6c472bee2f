//! The four page analyzers.
//!
//! Each analyzer is a total function over captured artifacts: it never performs
//! I/O and never fails. Missing inputs (page unreachable, empty body) degrade to
//! a zero score with an explanatory issue.
//!
//! - Security: TLS validity, security headers, cookie flags
//! - Performance: load time, page size, simulated web vitals
//! - SEO: title, meta description, headings, Open Graph, site files
//! - Accessibility: image alt text, headings, document language, link text

mod accessibility;
mod performance;
mod security;
mod seo;

use serde::Serialize;

pub use accessibility::analyze_accessibility;
pub use performance::{analyze_performance, PerformanceMetrics};
pub use security::{analyze_security, SecurityMetrics};
pub use seo::{analyze_seo, SeoMetrics};

/// Issue severity, assigned where the issue is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Critical,
    Minor,
}

/// A human-readable finding. Serializes as its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Critical,
        }
    }

    pub fn minor(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Minor,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Serialize for Issue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message)
    }
}

/// Result of one analyzer: metrics flattened next to `score` and `issues`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome<M> {
    #[serde(flatten)]
    pub metrics: M,
    pub score: u8,
    pub issues: Vec<Issue>,
}

/// Metrics of an analyzer that reports none; serializes to no fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoMetrics {}

/// Clamps an intermediate score into [0, 100].
pub(crate) fn clamp_score(raw: i32) -> u8 {
    // Lossless: the value is within 0..=100 after clamping
    raw.clamp(0, 100) as u8
}
