//! Simulated and advisory signals.
//!
//! The engine does not render pages, so Largest Contentful Paint, First
//! Contentful Paint, and Cumulative Layout Shift are simulated from the measured
//! load time. They are proxies, not browser measurements. The phishing advisory
//! is likewise a random stub until a real reputation check exists; it is
//! reported but never scored.
//!
//! Both sit behind [`SignalSource`] so tests and replays can inject fixed values.

use rand::Rng;
use serde::Serialize;

use crate::config::{CLS_SIMULATION_MAX, PHISHING_HIGH_RISK_PROBABILITY};

/// Simulated rendering-timing metrics. LCP and FCP are seconds, CLS is unitless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WebVitals {
    pub lcp: f64,
    pub fcp: f64,
    pub cls: f64,
}

/// Phishing advisory (not scored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhishingRisk {
    Low,
    High,
}

impl PhishingRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhishingRisk::Low => "LOW RISK",
            PhishingRisk::High => "HIGH RISK",
        }
    }
}

impl Serialize for PhishingRisk {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Source of the non-deterministic inputs to scoring.
///
/// Contract for `web_vitals`: without a load time, `lcp` and `fcp` are zero.
pub trait SignalSource: Send + Sync {
    fn web_vitals(&self, load_time_secs: Option<f64>) -> WebVitals;
    fn phishing_risk(&self) -> PhishingRisk;
}

/// Production source: vitals drawn around the measured load time.
///
/// With load time `t`: LCP ~ U(0.8t, 1.2t), FCP ~ U(0.4t, 0.8t). CLS ~ U(0, 0.25)
/// regardless of load time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSignals;

impl SignalSource for RandomSignals {
    fn web_vitals(&self, load_time_secs: Option<f64>) -> WebVitals {
        let mut rng = rand::rng();
        let (lcp, fcp) = match load_time_secs {
            Some(t) => {
                let t = t.max(0.0);
                (
                    rng.random_range(t * 0.8..=t * 1.2),
                    rng.random_range(t * 0.4..=t * 0.8),
                )
            }
            None => (0.0, 0.0),
        };
        let cls = rng.random_range(0.0..=CLS_SIMULATION_MAX);
        WebVitals { lcp, fcp, cls }
    }

    fn phishing_risk(&self) -> PhishingRisk {
        if rand::rng().random_bool(PHISHING_HIGH_RISK_PROBABILITY) {
            PhishingRisk::High
        } else {
            PhishingRisk::Low
        }
    }
}

/// Deterministic source for tests and for replaying captured artifacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSignals {
    pub vitals: WebVitals,
    pub phishing_risk: PhishingRisk,
}

impl FixedSignals {
    /// Vitals comfortably inside every threshold, low phishing risk.
    pub fn healthy() -> Self {
        Self {
            vitals: WebVitals {
                lcp: 1.0,
                fcp: 0.5,
                cls: 0.01,
            },
            phishing_risk: PhishingRisk::Low,
        }
    }
}

impl SignalSource for FixedSignals {
    fn web_vitals(&self, load_time_secs: Option<f64>) -> WebVitals {
        match load_time_secs {
            Some(_) => self.vitals,
            None => WebVitals {
                lcp: 0.0,
                fcp: 0.0,
                cls: self.vitals.cls,
            },
        }
    }

    fn phishing_risk(&self) -> PhishingRisk {
        self.phishing_risk
    }
}
