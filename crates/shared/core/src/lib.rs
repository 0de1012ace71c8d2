//! Crashgauge Core Domain
//!
//! Pure domain types for the crash-risk engine: indicator identities,
//! readings, normalized results and the risk breakdown handed to consumers.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod indicators;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Assessment, IndicatorDetail, NormalizedResult, RiskBreakdown, RiskLevel, Status,
    UnavailableReason,
};
pub use indicators::{IndicatorId, IndicatorReading, Polarity};
pub use values::{Score, Timestamp, Weight};
