use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Score value on the 0-100 scale - uses Decimal so weighted sums are exact
pub type Score = Decimal;

/// Relative importance of an indicator (0.0 - 1.0)
pub type Weight = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
