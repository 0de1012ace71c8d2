use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a market indicator tracked by the engine
///
/// Declaration order is the canonical order: weighted sums are always taken
/// in this order so results do not depend on how readings arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorId {
    /// Shiller cyclically-adjusted P/E
    Cape,
    /// 10y minus 2y treasury spread, in percent
    YieldCurve,
    /// Margin debt relative to GDP, in percent
    MarginDebt,
    /// High-yield option-adjusted spread, in percent
    CreditSpread,
    /// Total market cap relative to GDP, in percent
    BuffettIndicator,
    /// Implied equity volatility (VIX)
    VolatilityIndex,
}

impl IndicatorId {
    /// Every indicator, in canonical order
    pub const ALL: [IndicatorId; 6] = [
        IndicatorId::Cape,
        IndicatorId::YieldCurve,
        IndicatorId::MarginDebt,
        IndicatorId::CreditSpread,
        IndicatorId::BuffettIndicator,
        IndicatorId::VolatilityIndex,
    ];

    /// Human-readable name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            IndicatorId::Cape => "CAPE Ratio",
            IndicatorId::YieldCurve => "Yield Curve (10Y-2Y)",
            IndicatorId::MarginDebt => "Margin Debt / GDP",
            IndicatorId::CreditSpread => "High-Yield Credit Spread",
            IndicatorId::BuffettIndicator => "Buffett Indicator",
            IndicatorId::VolatilityIndex => "Volatility Index (VIX)",
        }
    }

    /// Unit the raw value is quoted in
    pub fn unit(&self) -> &'static str {
        match self {
            IndicatorId::Cape => "x",
            IndicatorId::VolatilityIndex => "pts",
            IndicatorId::YieldCurve
            | IndicatorId::MarginDebt
            | IndicatorId::CreditSpread
            | IndicatorId::BuffettIndicator => "%",
        }
    }

    /// Direction in which the indicator becomes dangerous
    pub fn default_polarity(&self) -> Polarity {
        match self {
            // Inversion (negative spread) is the danger signal
            IndicatorId::YieldCurve => Polarity::LowerIsWorse,
            _ => Polarity::HigherIsWorse,
        }
    }

    /// Can a well-formed value of this indicator be negative?
    pub fn allows_negative(&self) -> bool {
        matches!(self, IndicatorId::YieldCurve)
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which side of the thresholds is adverse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Values above the thresholds are dangerous
    HigherIsWorse,
    /// Values below the thresholds are dangerous
    LowerIsWorse,
}
