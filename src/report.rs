//! Audit report assembly.
//!
//! Assembly is a pure function of the captured artifacts, the signal source,
//! the scoring configuration, and a timestamp. Replaying the same artifacts
//! with a fixed signal source reproduces the report exactly.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::aggregate::{CategoryScores, IssueCount, Overall};
use crate::analysis::{
    analyze_accessibility, analyze_performance, analyze_security, analyze_seo, AnalysisOutcome,
    Issue, NoMetrics, PerformanceMetrics, SecurityMetrics, SeoMetrics,
};
use crate::config::ScoringConfig;
use crate::fetch::{FetchResult, SiteFiles};
use crate::signals::SignalSource;
use crate::target::AuditTarget;
use crate::tls::TlsProbeResult;

/// Everything the network phase of an audit captured.
#[derive(Debug, Clone)]
pub struct AuditArtifacts {
    pub tls: TlsProbeResult,
    /// `None` when the page was unreachable
    pub fetch: Option<FetchResult>,
    pub site_files: SiteFiles,
}

/// The audit result returned to callers. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    #[serde(serialize_with = "iso_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub status: &'static str,
    pub overall: Overall,
    pub security: AnalysisOutcome<SecurityMetrics>,
    pub performance: AnalysisOutcome<Option<PerformanceMetrics>>,
    pub seo: AnalysisOutcome<Option<SeoMetrics>>,
    pub accessibility: AnalysisOutcome<NoMetrics>,
    pub issues_count: IssueCount,
}

fn iso_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, true))
}

impl AuditReport {
    /// Runs the four analyzers over the artifacts and aggregates their scores.
    pub fn assemble(
        target: &AuditTarget,
        artifacts: &AuditArtifacts,
        signals: &dyn SignalSource,
        scoring: &ScoringConfig,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let fetch = artifacts.fetch.as_ref();
        let html = fetch.map(|f| f.text()).unwrap_or_default();

        let security = analyze_security(fetch, &artifacts.tls, signals.phishing_risk());
        let performance = analyze_performance(fetch, signals);
        let seo = analyze_seo(&html, &artifacts.site_files);
        let accessibility = analyze_accessibility(&html);

        let scores = CategoryScores {
            security: security.score,
            performance: performance.score,
            seo: seo.score,
            accessibility: accessibility.score,
        };
        let overall = Overall::from_scores(&scores, scoring);
        let issues_count = IssueCount::tally(
            security
                .issues
                .iter()
                .chain(&performance.issues)
                .chain(&seo.issues)
                .chain(&accessibility.issues),
        );

        Self {
            timestamp,
            url: target.url().to_string(),
            status: "success",
            overall,
            security,
            performance,
            seo,
            accessibility,
            issues_count,
        }
    }

    /// All issues in category order: security, performance, SEO, accessibility.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.security
            .issues
            .iter()
            .chain(&self.performance.issues)
            .chain(&self.seo.issues)
            .chain(&self.accessibility.issues)
    }
}
