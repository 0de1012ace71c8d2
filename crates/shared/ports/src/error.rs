use crashgauge_core::{IndicatorId, Weight};
use rust_decimal::Decimal;
use thiserror::Error;

/// Structural configuration errors - fatal at startup, never raised per evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Weight table has no weight for {0:?}")]
    MissingWeight(IndicatorId),

    #[error("Weight for {indicator:?} must be within [0, 1], got {weight}")]
    InvalidWeight { indicator: IndicatorId, weight: Weight },

    #[error("Weights must sum to 1.0, got {0}")]
    WeightSum(Decimal),

    #[error("Risk band bounds must be strictly increasing: {0}")]
    BandOrder(String),

    #[error("Risk band bound {0} is outside (0, 100]")]
    BandOutOfRange(Decimal),

    #[error("Invalid profile for {indicator:?}: {reason}")]
    InvalidProfile {
        indicator: IndicatorId,
        reason: String,
    },

    #[error("Duplicate profile for {0:?}")]
    DuplicateProfile(IndicatorId),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
