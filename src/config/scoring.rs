//! Scoring configuration: category weights, overall rounding rule, and grade thresholds.
//!
//! Weights are whole percentages so that "weights sum to 1.0" is an exact integer
//! check and weighted sums can be rounded exactly at the .5 boundary.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::error_handling::ConfigError;

/// Sum every valid weight set must reach (100% == 1.0).
pub const WEIGHT_TOTAL: u32 = 100;

/// Letter grade thresholds, highest first. Scores below the last threshold get `F`.
pub const GRADE_THRESHOLDS: &[(u8, Grade)] = &[
    (90, Grade::APlus),
    (80, Grade::A),
    (70, Grade::B),
    (60, Grade::C),
    (50, Grade::D),
];

/// Per-category weights in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub security: u32,
    pub performance: u32,
    pub seo: u32,
    pub accessibility: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            security: 35,
            performance: 30,
            seo: 25,
            accessibility: 10,
        }
    }
}

impl Weights {
    /// Sum of the four weights, widened so that any `u32` inputs add without overflow.
    pub fn total(&self) -> u64 {
        [self.security, self.performance, self.seo, self.accessibility]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.security, self.performance, self.seo, self.accessibility
        )
    }
}

/// Parses `security,performance,seo,accessibility` (e.g. `35,30,25,10`).
///
/// Only the shape is checked here; the sum is validated by [`ScoringConfig::new`].
impl FromStr for Weights {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::WeightFormat(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [security, performance, seo, accessibility] => Ok(Self {
                security: *security,
                performance: *performance,
                seo: *seo,
                accessibility: *accessibility,
            }),
            _ => Err(ConfigError::WeightFormat(s.to_string())),
        }
    }
}

/// Rounding rule for the overall score when the weighted sum ends in exactly .5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingMode {
    /// 62.5 -> 63
    HalfUp,
    /// 62.5 -> 62, 63.5 -> 64 (banker's rounding)
    HalfEven,
}

/// Letter grade derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::EnumIter)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Maps an overall score onto a letter grade.
    pub fn from_score(score: u8) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated scoring configuration. Only constructible through [`ScoringConfig::new`],
/// so holding one means the weights sum to exactly 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    weights: Weights,
    rounding: RoundingMode,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl ScoringConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::WeightSum` when the weights do not add up to 100.
    pub fn new(weights: Weights, rounding: RoundingMode) -> Result<Self, ConfigError> {
        let total = weights.total();
        if total != u64::from(WEIGHT_TOTAL) {
            return Err(ConfigError::WeightSum { total });
        }
        Ok(Self { weights, rounding })
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert_eq!(Weights::default().total(), u64::from(WEIGHT_TOTAL));
        assert!(ScoringConfig::new(Weights::default(), RoundingMode::HalfUp).is_ok());
    }

    #[test]
    fn test_weights_that_do_not_sum_to_one_are_rejected() {
        let weights = Weights {
            security: 35,
            performance: 30,
            seo: 25,
            accessibility: 5,
        };
        let err = ScoringConfig::new(weights, RoundingMode::HalfEven).unwrap_err();
        assert!(matches!(err, ConfigError::WeightSum { total: 95 }));
        assert!(err.to_string().contains("95"));
    }

    #[test]
    fn test_oversized_weights_do_not_wrap_to_one() {
        // u32 addition would wrap 4294967295 + 1 + 0 + 100 around to 100
        let weights: Weights = "4294967295,1,0,100".parse().unwrap();
        assert_eq!(weights.total(), 4_294_967_396);
        let err = ScoringConfig::new(weights, RoundingMode::HalfUp).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::WeightSum {
                total: 4_294_967_396
            }
        ));
    }

    #[test]
    fn test_weights_parse_and_display() {
        let weights: Weights = "40, 30, 20, 10".parse().unwrap();
        assert_eq!(weights.security, 40);
        assert_eq!(weights.accessibility, 10);
        assert_eq!(weights.to_string(), "40,30,20,10");
        assert!("40,30,20".parse::<Weights>().is_err());
        assert!("40,30,20,x".parse::<Weights>().is_err());
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::APlus);
        assert_eq!(Grade::from_score(90), Grade::APlus);
        assert_eq!(Grade::from_score(89), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        for grade in Grade::iter() {
            let json = serde_json::to_string(&grade).unwrap();
            assert_eq!(json, format!("\"{}\"", grade.as_str()));
        }
    }
}
