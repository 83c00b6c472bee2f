//! The audit pipeline.
//!
//! One audit runs sequentially: TLS probe, page fetch, robots.txt probe,
//! sitemap.xml probe, then analysis. Each network step carries its own timeout.
//! Only an unreachable page ends the audit early.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};

use crate::config::{Config, ScoringConfig, FETCH_TIMEOUT_SECS, SITE_FILE_TIMEOUT_SECS};
use crate::error_handling::{AuditError, FetchError};
use crate::fetch::{fetch_page, probe_site_files};
use crate::initialization::init_client;
use crate::report::{AuditArtifacts, AuditReport};
use crate::signals::{RandomSignals, SignalSource};
use crate::target::AuditTarget;
use crate::tls::probe_tls;

/// Runs audits with a shared HTTP client and a fixed scoring configuration.
///
/// Cheap to clone; the client and signal source are shared read-only.
#[derive(Clone)]
pub struct Auditor {
    client: Arc<reqwest::Client>,
    fetch_timeout: Duration,
    probe_timeout: Duration,
    scoring: ScoringConfig,
    signals: Arc<dyn SignalSource>,
}

impl Auditor {
    /// Creates an auditor with default timeouts and random simulated signals.
    pub fn new(client: Arc<reqwest::Client>, scoring: ScoringConfig) -> Self {
        Self {
            client,
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            probe_timeout: Duration::from_secs(SITE_FILE_TIMEOUT_SECS),
            scoring,
            signals: Arc::new(RandomSignals),
        }
    }

    /// Builds the HTTP client and validates scoring from the CLI configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the weights do not sum to 100% or the HTTP client
    /// cannot be created.
    pub fn from_config(config: &Config) -> Result<Self> {
        let scoring = config.scoring().context("Invalid scoring configuration")?;
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        Ok(Self::new(client, scoring).with_timeouts(
            Duration::from_secs(config.timeout_seconds),
            Duration::from_secs(config.probe_timeout_seconds),
        ))
    }

    /// Replaces the signal source, e.g. with [`FixedSignals`](crate::FixedSignals).
    pub fn with_signals(mut self, signals: Arc<dyn SignalSource>) -> Self {
        self.signals = signals;
        self
    }

    /// Overrides the page fetch timeout and the TLS/site-file probe timeout.
    pub fn with_timeouts(mut self, fetch_timeout: Duration, probe_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self.probe_timeout = probe_timeout;
        self
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Audits one page.
    ///
    /// # Errors
    ///
    /// - `AuditError::EmptyUrl` / `AuditError::InvalidUrl` before any network I/O
    /// - `AuditError::Unreachable` if the page fetch fails
    pub async fn audit(&self, raw_url: &str) -> Result<AuditReport, AuditError> {
        let target = AuditTarget::parse(raw_url)?;
        info!("Auditing {} (host {})", target.url(), target.host());

        let artifacts = self
            .capture(&target)
            .await
            .map_err(AuditError::Unreachable)?;
        let report = AuditReport::assemble(
            &target,
            &artifacts,
            self.signals.as_ref(),
            &self.scoring,
            Utc::now(),
        );

        info!(
            "Audit of {} complete: {} ({}), {} critical / {} minor issues",
            report.url,
            report.overall.score,
            report.overall.grade,
            report.issues_count.critical,
            report.issues_count.minor
        );
        Ok(report)
    }

    /// Runs the network phase and returns the captured artifacts.
    ///
    /// TLS and site-file failures are recorded in the artifacts; only a failed
    /// page fetch is an error.
    ///
    /// # Errors
    ///
    /// Returns the `FetchError` of the page GET.
    pub async fn capture(&self, target: &AuditTarget) -> Result<AuditArtifacts, FetchError> {
        let tls = probe_tls(target.host(), self.probe_timeout).await;

        let fetch = match fetch_page(&self.client, target.url(), self.fetch_timeout).await {
            Ok(fetch) => fetch,
            Err(e) => {
                warn!("Fetch failed for {}: {e}", target.url());
                return Err(e);
            }
        };

        let site_files = probe_site_files(&self.client, target.url(), self.probe_timeout).await;
        debug!(
            "Site files for {}: robots.txt {}, sitemap.xml {}",
            target.url(),
            site_files.robots_txt.as_str(),
            site_files.sitemap_xml.as_str()
        );

        Ok(AuditArtifacts {
            tls,
            fetch: Some(fetch),
            site_files,
        })
    }
}

impl std::fmt::Debug for Auditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auditor")
            .field("fetch_timeout", &self.fetch_timeout)
            .field("probe_timeout", &self.probe_timeout)
            .field("scoring", &self.scoring)
            .finish_non_exhaustive()
    }
}
