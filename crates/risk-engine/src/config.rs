//! Engine configuration
//!
//! Loaded once at process start. The serialized form is plain data; it is
//! validated when the engine is built and is immutable afterwards.

use crate::classifier::RiskBands;
use crate::weights::WeightTableConfig;
use crashgauge_ports::ConfigResult;
use serde::{Deserialize, Serialize};

/// Weight table and risk bands
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Indicator weights (must sum to 1.0)
    #[serde(default)]
    pub weights: WeightTableConfig,
    /// Risk band lower bounds
    #[serde(default)]
    pub bands: RiskBands,
}

impl EngineConfig {
    /// Check the weight table and bands without building an engine
    pub fn validate(&self) -> ConfigResult<()> {
        self.weights.build()?;
        self.bands.validate()
    }
}
