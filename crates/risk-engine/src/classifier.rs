//! Risk Classification
//!
//! Maps the composite score onto ordered risk bands and counts critical
//! warnings.
//!
//! ```text
//!   0 ──── moderate ──── elevated ──── high ──── extreme ──── 100
//!   │  Low   │  Moderate  │  Elevated  │  High  │  Extreme  │
//! ```
//!
//! Each bound is the inclusive lower edge of its band. Low always starts at 0
//! and Extreme always ends at 100, so the bands are exhaustive by
//! construction; validation only has to check their order.

use crate::aggregator::{CompositeScore, resolve_duplicates};
use crate::normalizer::MAX_SCORE;
use crashgauge_core::{NormalizedResult, RiskLevel, Score};
use crashgauge_ports::{ConfigError, ConfigResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lower bounds of the risk bands above Low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBands {
    pub moderate: Score,
    pub elevated: Score,
    pub high: Score,
    pub extreme: Score,
}

impl RiskBands {
    /// Validate and build band bounds
    pub fn new(moderate: Score, elevated: Score, high: Score, extreme: Score) -> ConfigResult<Self> {
        let bands = Self {
            moderate,
            elevated,
            high,
            extreme,
        };
        bands.validate()?;
        Ok(bands)
    }

    /// Bounds must be strictly increasing inside (0, 100]
    pub fn validate(&self) -> ConfigResult<()> {
        let bounds = self.bounds();

        for bound in bounds {
            if bound <= Decimal::ZERO || bound > MAX_SCORE {
                return Err(ConfigError::BandOutOfRange(bound));
            }
        }

        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::BandOrder(format!(
                "moderate={} elevated={} high={} extreme={}",
                self.moderate, self.elevated, self.high, self.extreme
            )));
        }

        Ok(())
    }

    /// Band containing a score
    pub fn level_for(&self, score: Score) -> RiskLevel {
        if score >= self.extreme {
            RiskLevel::Extreme
        } else if score >= self.high {
            RiskLevel::High
        } else if score >= self.elevated {
            RiskLevel::Elevated
        } else if score >= self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    /// Score range [lower, upper) of a level; Extreme includes 100
    pub fn range(&self, level: RiskLevel) -> (Score, Score) {
        match level {
            RiskLevel::Low => (Decimal::ZERO, self.moderate),
            RiskLevel::Moderate => (self.moderate, self.elevated),
            RiskLevel::Elevated => (self.elevated, self.high),
            RiskLevel::High => (self.high, self.extreme),
            RiskLevel::Extreme => (self.extreme, MAX_SCORE),
        }
    }

    fn bounds(&self) -> [Score; 4] {
        [self.moderate, self.elevated, self.high, self.extreme]
    }
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            moderate: dec!(20),
            elevated: dec!(40),
            high: dec!(60),
            extreme: dec!(80),
        }
    }
}

/// Output of the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// None when data is insufficient
    pub risk_level: Option<RiskLevel>,
    pub critical_warnings: usize,
}

/// Classify a composite score and count critical warnings
///
/// Only available results can be critical; unavailable indicators neither
/// add to nor suppress the count. Duplicate readings count once.
pub fn classify(
    composite: &CompositeScore,
    results: &[NormalizedResult],
    bands: &RiskBands,
) -> Classification {
    let risk_level = match composite {
        CompositeScore::Scored { score, .. } => Some(bands.level_for(*score)),
        CompositeScore::InsufficientData => None,
    };

    let critical_warnings = resolve_duplicates(results)
        .iter()
        .filter(|r| r.is_critical())
        .count();

    Classification {
        risk_level,
        critical_warnings,
    }
}
