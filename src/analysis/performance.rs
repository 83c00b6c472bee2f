//! Performance analysis: load time, page weight, and simulated web vitals.
//!
//! The vitals are proxies derived from the load time by the signal source, not
//! browser measurements.

use log::debug;
use serde::Serialize;

use super::{clamp_score, AnalysisOutcome, Issue};
use crate::config::{
    CLS_LIMIT, CLS_PENALTY, FCP_LIMIT_SECS, FCP_PENALTY, LARGE_PAGE_KB, LARGE_PAGE_PENALTY,
    LCP_LIMIT_SECS, LCP_PENALTY, MEDIUM_PAGE_KB, MEDIUM_PAGE_PENALTY, MISSING_LOAD_TIME_PENALTY,
    MODERATE_LOAD_PENALTY, MODERATE_LOAD_SECS, SLOW_LOAD_PENALTY, SLOW_LOAD_SECS,
    VERY_LARGE_PAGE_KB, VERY_LARGE_PAGE_PENALTY, VERY_SLOW_LOAD_PENALTY, VERY_SLOW_LOAD_SECS,
};
use crate::fetch::FetchResult;
use crate::signals::{SignalSource, WebVitals};
use crate::utils::round_to;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    pub status_code: u16,
    pub load_time_s: Option<f64>,
    pub page_size_kb: f64,
    /// Simulated vitals: LCP/FCP to 2 decimals, CLS to 3
    pub metrics: WebVitals,
}

/// Scores load time and page weight. Metrics are absent when the page was not fetched.
pub fn analyze_performance(
    fetch: Option<&FetchResult>,
    signals: &dyn SignalSource,
) -> AnalysisOutcome<Option<PerformanceMetrics>> {
    let Some(fetch) = fetch else {
        return AnalysisOutcome {
            metrics: None,
            score: 0,
            issues: vec![Issue::minor("Site not reachable for performance test.")],
        };
    };

    let load_time = fetch.elapsed_secs;
    let page_size_kb = round_to(fetch.body.len() as f64 / 1024.0, 2);
    let vitals = signals.web_vitals(load_time);

    let mut score = 100;
    let mut issues = Vec::new();

    if vitals.lcp > LCP_LIMIT_SECS {
        score -= LCP_PENALTY;
        issues.push(Issue::critical(
            "High Largest Contentful Paint (LCP) - Page rendering is slow.",
        ));
    }
    if vitals.fcp > FCP_LIMIT_SECS {
        score -= FCP_PENALTY;
        issues.push(Issue::critical(
            "High First Contentful Paint (FCP) - Initial content took time to display.",
        ));
    }
    if vitals.cls > CLS_LIMIT {
        score -= CLS_PENALTY;
        issues.push(Issue::critical(
            "High Cumulative Layout Shift (CLS) - Page layout is unstable.",
        ));
    }

    match load_time {
        None => {
            score -= MISSING_LOAD_TIME_PENALTY;
            issues.push(Issue::minor("Could not measure load time."));
        }
        Some(t) if t > VERY_SLOW_LOAD_SECS => {
            score -= VERY_SLOW_LOAD_PENALTY;
            // Critical like the other slow bands, though the message has no capitalised `High`
            issues.push(Issue::critical(format!("Very high load time {t:?}s.")));
        }
        Some(t) if t > SLOW_LOAD_SECS => {
            score -= SLOW_LOAD_PENALTY;
            issues.push(Issue::critical(format!("High load time {t:?}s.")));
        }
        Some(t) if t > MODERATE_LOAD_SECS => {
            score -= MODERATE_LOAD_PENALTY;
            issues.push(Issue::minor(format!("Moderate load time {t:?}s.")));
        }
        Some(_) => {}
    }

    if page_size_kb > VERY_LARGE_PAGE_KB {
        score -= VERY_LARGE_PAGE_PENALTY;
        issues.push(Issue::minor(format!(
            "Page very large: {page_size_kb:?} KB. Consider optimizing assets."
        )));
    } else if page_size_kb > LARGE_PAGE_KB {
        score -= LARGE_PAGE_PENALTY;
        issues.push(Issue::minor(format!(
            "Page large: {page_size_kb:?} KB. Consider optimizing assets."
        )));
    } else if page_size_kb > MEDIUM_PAGE_KB {
        score -= MEDIUM_PAGE_PENALTY;
        issues.push(Issue::minor(format!(
            "Page medium: {page_size_kb:?} KB. Could be optimized."
        )));
    }

    debug!(
        "Performance score {score}: load {load_time:?}s, {page_size_kb} KB, vitals {vitals:?}"
    );
    AnalysisOutcome {
        metrics: Some(PerformanceMetrics {
            status_code: fetch.status,
            load_time_s: load_time,
            page_size_kb,
            metrics: WebVitals {
                lcp: round_to(vitals.lcp, 2),
                fcp: round_to(vitals.fcp, 2),
                cls: round_to(vitals.cls, 3),
            },
        }),
        score: clamp_score(score),
        issues,
    }
}
