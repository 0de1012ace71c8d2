use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::indicator::{IndicatorId, Polarity};

/// A single observation of an indicator together with its severity thresholds
///
/// `value == None` means the indicator could not be obtained for this
/// evaluation. That is a different state from a reading of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    /// Which indicator this is
    pub indicator: IndicatorId,
    /// Current value, if available
    pub value: Option<Decimal>,
    /// Long-run average (maps to a sub-score of zero)
    pub historical_avg: Decimal,
    /// Status turns to warning once this level is crossed
    pub warning_level: Decimal,
    /// Status turns to danger (and the sub-score saturates) at this level
    pub danger_level: Decimal,
    /// Override of the indicator's default polarity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
}

impl IndicatorReading {
    /// Create a reading with a known value
    pub fn new(
        indicator: IndicatorId,
        value: Decimal,
        historical_avg: Decimal,
        warning_level: Decimal,
        danger_level: Decimal,
    ) -> Self {
        Self {
            indicator,
            value: Some(value),
            historical_avg,
            warning_level,
            danger_level,
            polarity: None,
        }
    }

    /// Create a reading for an indicator that failed to load
    pub fn unavailable(
        indicator: IndicatorId,
        historical_avg: Decimal,
        warning_level: Decimal,
        danger_level: Decimal,
    ) -> Self {
        Self {
            indicator,
            value: None,
            historical_avg,
            warning_level,
            danger_level,
            polarity: None,
        }
    }

    /// Create a reading from a floating-point feed value
    ///
    /// NaN and infinities become an unavailable value.
    pub fn from_f64(
        indicator: IndicatorId,
        value: f64,
        historical_avg: Decimal,
        warning_level: Decimal,
        danger_level: Decimal,
    ) -> Self {
        Self {
            indicator,
            value: Decimal::from_f64(value),
            historical_avg,
            warning_level,
            danger_level,
            polarity: None,
        }
    }

    /// Set an explicit polarity
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    /// Drop the value, keeping the thresholds
    pub fn without_value(mut self) -> Self {
        self.value = None;
        self
    }

    /// Polarity in effect for this reading
    pub fn effective_polarity(&self) -> Polarity {
        self.polarity
            .unwrap_or_else(|| self.indicator.default_polarity())
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}
