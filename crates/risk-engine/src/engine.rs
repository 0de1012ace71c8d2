//! Risk Engine
//!
//! Wires normalizer, aggregator and classifier into the single public
//! operation: readings in, breakdown out.
//!
//! The engine holds only validated, immutable configuration. `evaluate`
//! takes `&self`, has no side effects besides logging, and can be called
//! from any number of threads at once.

use crate::aggregator::aggregate_detailed;
use crate::classifier::{RiskBands, classify};
use crate::config::EngineConfig;
use crate::normalizer::normalize;
use crate::weights::WeightTable;
use crashgauge_core::{
    IndicatorDetail, IndicatorId, IndicatorReading, NormalizedResult, RiskBreakdown,
    UnavailableReason,
};
use crashgauge_ports::{ConfigResult, ReadingSource};
use log::{debug, info, warn};

/// Composite crash-risk engine
#[derive(Debug, Clone)]
pub struct RiskEngine {
    weights: WeightTable,
    bands: RiskBands,
}

impl RiskEngine {
    /// Build from configuration, failing fast on structural errors
    pub fn new(config: EngineConfig) -> ConfigResult<Self> {
        let weights = config.weights.build()?;
        Self::with_parts(weights, config.bands)
    }

    /// Build from an already validated weight table
    pub fn with_parts(weights: WeightTable, bands: RiskBands) -> ConfigResult<Self> {
        bands.validate()?;
        info!(
            "[ENGINE] Configured: weight table {} bands {}/{}/{}/{}",
            weights.version(),
            bands.moderate,
            bands.elevated,
            bands.high,
            bands.extreme
        );
        Ok(Self { weights, bands })
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn bands(&self) -> &RiskBands {
        &self.bands
    }

    /// Evaluate a set of readings
    ///
    /// Never fails on bad input: unusable readings are excluded and an empty
    /// usable set yields the insufficient-data breakdown.
    pub fn evaluate(&self, readings: &[IndicatorReading]) -> RiskBreakdown {
        let mut results: Vec<NormalizedResult> = readings.iter().map(normalize).collect();

        // Indicators with no reading at all still get a detail line
        for indicator in IndicatorId::ALL {
            if !results.iter().any(|r| r.indicator == indicator) {
                results.push(NormalizedResult::unavailable(
                    indicator,
                    UnavailableReason::NoValue,
                ));
            }
        }

        let aggregation = aggregate_detailed(&results, &self.weights);
        let classification = classify(&aggregation.composite, &results, &self.bands);

        let indicators: Vec<IndicatorDetail> = aggregation
            .contributions
            .iter()
            .map(|c| IndicatorDetail {
                indicator: c.result.indicator,
                assessment: c.result.assessment,
                weight: c.weight,
                effective_weight: c.effective_weight,
                contribution: c.weighted_contribution,
            })
            .collect();

        let available_indicators = indicators
            .iter()
            .filter(|d| d.assessment.is_available())
            .count();

        let breakdown = RiskBreakdown {
            total_score: aggregation.composite.value(),
            risk_level: classification.risk_level,
            critical_warnings: classification.critical_warnings,
            available_indicators,
            coverage: aggregation.composite.coverage(),
            insufficient_data: aggregation.composite.is_insufficient(),
            weight_table_version: self.weights.version().to_string(),
            indicators,
        };

        if breakdown.insufficient_data {
            warn!(
                "[ENGINE] Insufficient data: none of {} readings usable",
                readings.len()
            );
        } else {
            debug!(
                "[ENGINE] score={} level={:?} critical={} available={}/{}",
                breakdown.total_score,
                breakdown.risk_level,
                breakdown.critical_warnings,
                breakdown.available_indicators,
                IndicatorId::ALL.len()
            );
        }

        breakdown
    }

    /// Pull readings from a collaborator and evaluate them
    pub fn evaluate_source(&self, source: &dyn ReadingSource) -> RiskBreakdown {
        let readings = source.readings();
        debug!(
            "[ENGINE] {} readings from source {}",
            readings.len(),
            source.name()
        );
        self.evaluate(&readings)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self {
            weights: WeightTable::default(),
            bands: RiskBands::default(),
        }
    }
}
