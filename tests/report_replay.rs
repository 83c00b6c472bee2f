//! Replaying captured artifacts.
//!
//! Report assembly is a pure function of the artifacts, the signal source, and
//! the scoring configuration, so replaying one capture must reproduce the report
//! apart from the timestamp.

mod helpers;

use chrono::{TimeZone, Utc};
use webpulse::{AuditReport, AuditTarget, FixedSignals, RoundingMode, ScoringConfig, Weights};

use helpers::{test_auditor, well_formed_site};

#[tokio::test]
async fn test_replay_is_idempotent_apart_from_timestamp() {
    let server = well_formed_site();
    let target = AuditTarget::parse(&server.url("/").to_string()).unwrap();
    let artifacts = test_auditor().capture(&target).await.expect("page should be reachable");

    let signals = FixedSignals::healthy();
    let scoring = ScoringConfig::default();
    let first = AuditReport::assemble(
        &target,
        &artifacts,
        &signals,
        &scoring,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    );
    let second = AuditReport::assemble(
        &target,
        &artifacts,
        &signals,
        &scoring,
        Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap(),
    );

    assert_ne!(first.timestamp, second.timestamp);

    let mut first_json = serde_json::to_value(&first).unwrap();
    let mut second_json = serde_json::to_value(&second).unwrap();
    first_json.as_object_mut().unwrap().remove("timestamp");
    second_json.as_object_mut().unwrap().remove("timestamp");
    assert_eq!(first_json, second_json);
}

#[tokio::test]
async fn test_replay_under_different_rounding() {
    let server = well_formed_site();
    let target = AuditTarget::parse(&server.url("/").to_string()).unwrap();
    let artifacts = test_auditor().capture(&target).await.unwrap();
    let signals = FixedSignals::healthy();
    let now = Utc::now();

    // security 60, performance 100, seo 70, accessibility 100 -> 78.5
    let half_up = AuditReport::assemble(
        &target,
        &artifacts,
        &signals,
        &ScoringConfig::new(Weights::default(), RoundingMode::HalfUp).unwrap(),
        now,
    );
    let half_even = AuditReport::assemble(
        &target,
        &artifacts,
        &signals,
        &ScoringConfig::new(Weights::default(), RoundingMode::HalfEven).unwrap(),
        now,
    );

    assert_eq!(half_up.overall.score, 79);
    assert_eq!(half_even.overall.score, 78);
    assert_eq!(half_up.security, half_even.security);
    assert_eq!(half_up.seo, half_even.seo);
}
