//! Indicator Profiles
//!
//! Declarative threshold table: for each indicator, its long-run average,
//! warning and danger levels, and polarity. Fetchers use it to turn a bare
//! value into a full [`IndicatorReading`].

use crashgauge_core::{IndicatorId, IndicatorReading, Polarity};
use crashgauge_ports::{ConfigError, ConfigResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Thresholds for one indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorProfile {
    pub indicator: IndicatorId,
    pub historical_avg: Decimal,
    pub warning_level: Decimal,
    pub danger_level: Decimal,
    /// Falls back to the indicator's default polarity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
}

impl IndicatorProfile {
    pub fn new(
        indicator: IndicatorId,
        historical_avg: Decimal,
        warning_level: Decimal,
        danger_level: Decimal,
    ) -> Self {
        Self {
            indicator,
            historical_avg,
            warning_level,
            danger_level,
            polarity: None,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
            .unwrap_or_else(|| self.indicator.default_polarity())
    }

    /// Thresholds must be ordered avg < warning <= danger in the adverse direction
    pub fn validate(&self) -> ConfigResult<()> {
        let (avg, warning, danger) = match self.polarity() {
            Polarity::HigherIsWorse => (self.historical_avg, self.warning_level, self.danger_level),
            Polarity::LowerIsWorse => (-self.historical_avg, -self.warning_level, -self.danger_level),
        };

        if avg >= warning {
            return Err(ConfigError::InvalidProfile {
                indicator: self.indicator,
                reason: format!(
                    "historical average {} is not on the safe side of warning level {}",
                    self.historical_avg, self.warning_level
                ),
            });
        }
        if warning > danger {
            return Err(ConfigError::InvalidProfile {
                indicator: self.indicator,
                reason: format!(
                    "warning level {} is past danger level {}",
                    self.warning_level, self.danger_level
                ),
            });
        }
        Ok(())
    }

    /// Build a reading for a value (None = unavailable)
    pub fn reading(&self, value: Option<Decimal>) -> IndicatorReading {
        IndicatorReading {
            indicator: self.indicator,
            value,
            historical_avg: self.historical_avg,
            warning_level: self.warning_level,
            danger_level: self.danger_level,
            polarity: self.polarity,
        }
    }
}

/// Validated set of profiles, at most one per indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSet {
    profiles: BTreeMap<IndicatorId, IndicatorProfile>,
}

impl ProfileSet {
    /// Validate each profile and reject duplicates
    pub fn new(profiles: impl IntoIterator<Item = IndicatorProfile>) -> ConfigResult<Self> {
        let mut by_indicator = BTreeMap::new();
        for profile in profiles {
            profile.validate()?;
            if by_indicator.insert(profile.indicator, profile).is_some() {
                return Err(ConfigError::DuplicateProfile(profile.indicator));
            }
        }
        Ok(Self {
            profiles: by_indicator,
        })
    }

    pub fn get(&self, indicator: IndicatorId) -> Option<&IndicatorProfile> {
        self.profiles.get(&indicator)
    }

    /// Reading for an indicator, or None if there is no profile for it
    pub fn reading(&self, indicator: IndicatorId, value: Option<Decimal>) -> Option<IndicatorReading> {
        self.get(indicator).map(|p| p.reading(value))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Calibrated defaults
///
/// | indicator | avg | warning | danger |
/// |---|---|---|---|
/// | CAPE | 17 | 25 | 30 |
/// | Yield curve (10Y-2Y, %) | 1.0 | 0.0 | -0.5 |
/// | Margin debt (% GDP) | 2.0 | 2.5 | 3.0 |
/// | HY credit spread (%) | 4.0 | 5.0 | 7.0 |
/// | Buffett indicator (% GDP) | 100 | 120 | 160 |
/// | VIX | 19.5 | 25 | 35 |
pub fn default_profiles() -> Vec<IndicatorProfile> {
    vec![
        IndicatorProfile::new(IndicatorId::Cape, dec!(17), dec!(25), dec!(30)),
        IndicatorProfile::new(IndicatorId::YieldCurve, dec!(1.0), dec!(0.0), dec!(-0.5)),
        IndicatorProfile::new(IndicatorId::MarginDebt, dec!(2.0), dec!(2.5), dec!(3.0)),
        IndicatorProfile::new(IndicatorId::CreditSpread, dec!(4.0), dec!(5.0), dec!(7.0)),
        IndicatorProfile::new(IndicatorId::BuffettIndicator, dec!(100), dec!(120), dec!(160)),
        IndicatorProfile::new(IndicatorId::VolatilityIndex, dec!(19.5), dec!(25), dec!(35)),
    ]
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self {
            profiles: default_profiles()
                .into_iter()
                .map(|p| (p.indicator, p))
                .collect(),
        }
    }
}
