//! Indicator identities and readings
//!
//! Readings arrive from collaborators (fetchers, snapshot files) and carry
//! their own thresholds, so the scoring code stays generic over indicators.

mod indicator;
mod reading;

pub use indicator::{IndicatorId, Polarity};
pub use reading::IndicatorReading;
