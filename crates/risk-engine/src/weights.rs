//! Weight Table
//!
//! Relative importance of each indicator in the composite. The table is
//! versioned data: retuning risk sensitivity means shipping a new table,
//! not touching the aggregator.

use crashgauge_core::{IndicatorId, Weight};
use crashgauge_ports::{ConfigError, ConfigResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Allowed distance of the weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: Decimal = dec!(0.000000001);

/// Validated indicator weights
///
/// Every canonical indicator has a non-negative weight and the weights sum
/// to 1.0. Construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightTable {
    version: String,
    weights: BTreeMap<IndicatorId, Weight>,
}

impl WeightTable {
    /// Validate and build a table
    pub fn new(
        version: impl Into<String>,
        weights: BTreeMap<IndicatorId, Weight>,
    ) -> ConfigResult<Self> {
        for indicator in IndicatorId::ALL {
            let weight = weights
                .get(&indicator)
                .copied()
                .ok_or(ConfigError::MissingWeight(indicator))?;
            if weight < Decimal::ZERO || weight > Decimal::ONE {
                return Err(ConfigError::InvalidWeight { indicator, weight });
            }
        }

        let sum = weights
            .values()
            .try_fold(Decimal::ZERO, |acc, w| acc.checked_add(*w))
            .ok_or(ConfigError::WeightSum(Decimal::MAX))?;
        if (sum - Decimal::ONE).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }

        Ok(Self {
            version: version.into(),
            weights,
        })
    }

    /// Weight of one indicator
    pub fn weight(&self, indicator: IndicatorId) -> Weight {
        self.weights
            .get(&indicator)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Sum over the full canonical set (1.0 within tolerance)
    pub fn total(&self) -> Weight {
        self.weights.values().sum()
    }

}

impl Default for WeightTable {
    fn default() -> Self {
        let weights = BTreeMap::from([
            (IndicatorId::Cape, dec!(0.25)),
            (IndicatorId::YieldCurve, dec!(0.15)),
            (IndicatorId::MarginDebt, dec!(0.10)),
            (IndicatorId::CreditSpread, dec!(0.15)),
            (IndicatorId::BuffettIndicator, dec!(0.20)),
            (IndicatorId::VolatilityIndex, dec!(0.15)),
        ]);
        Self {
            version: "2024.1".to_string(),
            weights,
        }
    }
}

/// Serialized form of a weight table, validated by [`WeightTableConfig::build`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightTableConfig {
    pub version: String,
    pub weights: BTreeMap<IndicatorId, Weight>,
}

impl WeightTableConfig {
    pub fn build(&self) -> ConfigResult<WeightTable> {
        WeightTable::new(self.version.clone(), self.weights.clone())
    }
}

impl Default for WeightTableConfig {
    fn default() -> Self {
        let table = WeightTable::default();
        Self {
            version: table.version,
            weights: table.weights,
        }
    }
}
