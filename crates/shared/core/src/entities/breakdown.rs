use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assessment::Assessment;
use crate::indicators::IndicatorId;
use crate::values::{Score, Weight};

/// Discrete crash-risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    Elevated,
    High,
    Extreme,
}

impl RiskLevel {
    /// Every level, from least to most severe
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::Elevated,
        RiskLevel::High,
        RiskLevel::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Elevated => "elevated",
            RiskLevel::High => "high",
            RiskLevel::Extreme => "extreme",
        }
    }

    /// One-line guidance shown next to the level
    pub fn summary(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Indicators are near historical norms",
            RiskLevel::Moderate => "Some indicators are drifting above normal",
            RiskLevel::Elevated => "Several indicators show stress; stay alert",
            RiskLevel::High => "Broad stress across indicators",
            RiskLevel::Extreme => "Most indicators are at danger levels",
        }
    }
}

/// Per-indicator line of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDetail {
    pub indicator: IndicatorId,
    pub assessment: Assessment,
    /// Weight from the weight table
    pub weight: Weight,
    /// Share of the composite after renormalizing over available indicators
    pub effective_weight: Weight,
    /// effective_weight * sub_score (zero when unavailable)
    pub contribution: Score,
}

/// Result of one evaluation
///
/// Built fresh on every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Composite score in [0, 100]; zero when data is insufficient
    pub total_score: Score,
    /// None when no indicator could be used
    pub risk_level: Option<RiskLevel>,
    /// Number of available indicators in the danger band
    pub critical_warnings: usize,
    /// Number of indicators that contributed to the score
    pub available_indicators: usize,
    /// Share of total table weight carried by available indicators, in [0, 1]
    pub coverage: Decimal,
    pub insufficient_data: bool,
    pub weight_table_version: String,
    /// Canonical order
    pub indicators: Vec<IndicatorDetail>,
}

impl RiskBreakdown {
    /// Detail line for one indicator
    pub fn detail(&self, indicator: IndicatorId) -> Option<&IndicatorDetail> {
        self.indicators.iter().find(|d| d.indicator == indicator)
    }

    /// Indicators that were excluded from the score
    pub fn unavailable_indicators(&self) -> Vec<IndicatorId> {
        self.indicators
            .iter()
            .filter(|d| !d.assessment.is_available())
            .map(|d| d.indicator)
            .collect()
    }

    /// Short headline for display
    pub fn headline(&self) -> String {
        match self.risk_level {
            None => "Data unavailable".to_string(),
            Some(level) => format!(
                "{} risk ({:.1}/100, {} critical warning{})",
                level.as_str(),
                self.total_score,
                self.critical_warnings,
                if self.critical_warnings == 1 { "" } else { "s" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Status, UnavailableReason};
    use rust_decimal_macros::dec;

    fn breakdown() -> RiskBreakdown {
        RiskBreakdown {
            total_score: dec!(51.24),
            risk_level: Some(RiskLevel::Elevated),
            critical_warnings: 1,
            available_indicators: 1,
            coverage: dec!(0.25),
            insufficient_data: false,
            weight_table_version: "test".to_string(),
            indicators: vec![
                IndicatorDetail {
                    indicator: IndicatorId::Cape,
                    assessment: Assessment::Scored {
                        sub_score: dec!(100),
                        status: Status::Danger,
                    },
                    weight: dec!(0.25),
                    effective_weight: dec!(1),
                    contribution: dec!(100),
                },
                IndicatorDetail {
                    indicator: IndicatorId::MarginDebt,
                    assessment: Assessment::Unavailable {
                        reason: UnavailableReason::NoValue,
                    },
                    weight: dec!(0.10),
                    effective_weight: Decimal::ZERO,
                    contribution: Decimal::ZERO,
                },
            ],
        }
    }

    #[test]
    fn test_levels_are_ordered() {
        let mut sorted = RiskLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, RiskLevel::ALL);
    }

    #[test]
    fn test_detail_lookup() {
        let b = breakdown();
        assert!(b.detail(IndicatorId::Cape).is_some());
        assert!(b.detail(IndicatorId::VolatilityIndex).is_none());
        assert_eq!(b.unavailable_indicators(), vec![IndicatorId::MarginDebt]);
    }

    #[test]
    fn test_headline() {
        let b = breakdown();
        assert_eq!(b.headline(), "elevated risk (51.2/100, 1 critical warning)");

        let empty = RiskBreakdown {
            risk_level: None,
            insufficient_data: true,
            ..b
        };
        assert_eq!(empty.headline(), "Data unavailable");
    }
}
