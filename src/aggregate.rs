//! Aggregation of the four category scores into an overall score and grade.

use serde::Serialize;

use crate::analysis::Issue;
use crate::config::{Grade, RoundingMode, ScoringConfig, WEIGHT_TOTAL};

/// The four clamped category scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScores {
    pub security: u8,
    pub performance: u8,
    pub seo: u8,
    pub accessibility: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overall {
    pub score: u8,
    pub grade: Grade,
}

impl Overall {
    pub fn from_scores(scores: &CategoryScores, scoring: &ScoringConfig) -> Self {
        let score = overall_score(scores, scoring);
        Self {
            score,
            grade: Grade::from_score(score),
        }
    }
}

/// Weighted overall score.
///
/// The weighted sum is kept in hundredths (score × percent), so the fractional
/// part is exact and the configured rounding rule decides the .5 case.
pub fn overall_score(scores: &CategoryScores, scoring: &ScoringConfig) -> u8 {
    let weights = scoring.weights();
    let hundredths = u32::from(scores.security) * weights.security
        + u32::from(scores.performance) * weights.performance
        + u32::from(scores.seo) * weights.seo
        + u32::from(scores.accessibility) * weights.accessibility;

    let whole = hundredths / WEIGHT_TOTAL;
    let remainder = hundredths % WEIGHT_TOTAL;
    let half = WEIGHT_TOTAL / 2;
    let rounded = match scoring.rounding() {
        RoundingMode::HalfUp if remainder >= half => whole + 1,
        RoundingMode::HalfEven if remainder > half || (remainder == half && whole % 2 == 1) => {
            whole + 1
        }
        _ => whole,
    };

    // Weights sum to 100 and each score is at most 100
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Issue totals by severity. Derived for display only; never scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCount {
    pub critical: usize,
    pub minor: usize,
}

impl IssueCount {
    pub fn tally<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        issues
            .into_iter()
            .fold(Self::default(), |mut count, issue| {
                if issue.is_critical() {
                    count.critical += 1;
                } else {
                    count.minor += 1;
                }
                count
            })
    }
}
