//! Runner configuration
//!
//! One JSON file carries the engine configuration (weights, bands) and the
//! collaborator-side settings (indicator profiles, staleness policy).

use crate::error::{LoadError, Result};
use chrono::Duration;
use crashgauge_risk_engine::{
    EngineConfig, IndicatorProfile, ProfileSet, RiskEngine, default_profiles,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Weight table and risk bands
    #[serde(flatten)]
    pub engine: EngineConfig,
    /// Thresholds used to complete snapshot entries
    #[serde(default = "default_profiles")]
    pub profiles: Vec<IndicatorProfile>,
    /// Readings older than this are passed to the engine as unavailable
    #[serde(default)]
    pub max_reading_age_hours: Option<i64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            profiles: default_profiles(),
            max_reading_age_hours: None,
        }
    }
}

impl RunnerConfig {
    /// Staleness limit, if any
    pub fn max_reading_age(&self) -> Option<Duration> {
        self.max_reading_age_hours.and_then(Duration::try_hours)
    }

    /// Validate everything and build the runtime pieces
    pub fn build(&self) -> Result<(RiskEngine, ProfileSet)> {
        if let Some(hours) = self.max_reading_age_hours
            && (hours <= 0 || self.max_reading_age().is_none())
        {
            return Err(LoadError::InvalidMaxAge(hours));
        }
        let engine = RiskEngine::new(self.engine.clone())?;
        let profiles = ProfileSet::new(self.profiles.iter().copied())?;
        if profiles.is_empty() {
            warn!("[CONFIG] No indicator profiles, snapshot entries must carry their own thresholds");
        }
        info!(
            "[CONFIG] {} indicator profiles, max reading age {:?}h",
            profiles.len(),
            self.max_reading_age_hours
        );
        Ok((engine, profiles))
    }
}

/// Load runner configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunnerConfig> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<RunnerConfig> {
    let config: RunnerConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<RunnerConfig> {
    let default_config = include_str!("crashgauge.json");
    load_config_from_str(default_config)
}
