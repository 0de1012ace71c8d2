//! Reading Normalization
//!
//! Converts a raw reading into a bounded sub-score and a status using the
//! reading's own thresholds.
//!
//! ## Curve
//!
//! Piecewise linear in the adverse direction:
//!
//! ```text
//! score
//!  100 ┤                    ●━━━━━━━
//!      │                  ╱
//!   50 ┤          ●━━━━━╱
//!      │        ╱
//!    0 ┤━━━━━━●
//!      └──────┬───────┬─────┬────── value
//!            avg    warning danger
//! ```
//!
//! Lower-is-worse indicators are negated first so one curve serves both
//! polarities.

use crashgauge_core::{
    IndicatorReading, NormalizedResult, Polarity, Score, Status, UnavailableReason,
};
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Sub-score at the warning threshold
pub const WARNING_SCORE: Score = dec!(50);

/// Saturation value of the sub-score
pub const MAX_SCORE: Score = dec!(100);

/// Thresholds and value flipped so that "higher is worse"
#[derive(Debug, Clone, Copy)]
struct Oriented {
    value: Decimal,
    avg: Decimal,
    warning: Decimal,
    danger: Decimal,
}

impl Oriented {
    fn from_reading(reading: &IndicatorReading, value: Decimal) -> Self {
        let sign = match reading.effective_polarity() {
            Polarity::HigherIsWorse => Decimal::ONE,
            Polarity::LowerIsWorse => Decimal::NEGATIVE_ONE,
        };
        Self {
            value: value * sign,
            avg: reading.historical_avg * sign,
            warning: reading.warning_level * sign,
            danger: reading.danger_level * sign,
        }
    }

    fn thresholds_consistent(&self) -> bool {
        self.avg < self.warning && self.warning <= self.danger
    }

    fn status(&self) -> Status {
        if self.value >= self.danger {
            Status::Danger
        } else if self.value >= self.warning {
            Status::Warning
        } else {
            Status::Safe
        }
    }

    /// None on arithmetic overflow
    fn sub_score(&self) -> Option<Score> {
        if self.value <= self.avg {
            return Some(Decimal::ZERO);
        }
        if self.value >= self.danger {
            return Some(MAX_SCORE);
        }

        let raw = if self.value < self.warning {
            let span = self.warning.checked_sub(self.avg)?;
            let past_avg = self.value.checked_sub(self.avg)?;
            WARNING_SCORE.checked_mul(past_avg)?.checked_div(span)?
        } else {
            // warning <= value < danger, so the span is non-zero
            let span = self.danger.checked_sub(self.warning)?;
            let past_warning = self.value.checked_sub(self.warning)?;
            let band = MAX_SCORE - WARNING_SCORE;
            WARNING_SCORE.checked_add(band.checked_mul(past_warning)?.checked_div(span)?)?
        };

        Some(raw.clamp(Decimal::ZERO, MAX_SCORE))
    }
}

/// Normalize one reading
///
/// Never fails: missing, impossible or badly configured readings come back
/// as an unavailable result, which the aggregator excludes.
pub fn normalize(reading: &IndicatorReading) -> NormalizedResult {
    let indicator = reading.indicator;

    let Some(value) = reading.value else {
        debug!("[NORMALIZE] {:?}: no value", indicator);
        return NormalizedResult::unavailable(indicator, UnavailableReason::NoValue);
    };

    if value < Decimal::ZERO && !indicator.allows_negative() {
        warn!(
            "[NORMALIZE] {:?}: negative value {} is impossible, excluding",
            indicator, value
        );
        return NormalizedResult::unavailable(indicator, UnavailableReason::OutOfDomain);
    }

    let oriented = Oriented::from_reading(reading, value);
    if !oriented.thresholds_consistent() {
        warn!(
            "[NORMALIZE] {:?}: thresholds avg={} warning={} danger={} not ordered for {:?}, excluding",
            indicator,
            reading.historical_avg,
            reading.warning_level,
            reading.danger_level,
            reading.effective_polarity()
        );
        return NormalizedResult::unavailable(indicator, UnavailableReason::InconsistentThresholds);
    }

    let Some(sub_score) = oriented.sub_score() else {
        warn!(
            "[NORMALIZE] {:?}: value {} overflows scoring arithmetic, excluding",
            indicator, value
        );
        return NormalizedResult::unavailable(indicator, UnavailableReason::OutOfDomain);
    };
    let status = oriented.status();

    debug!(
        "[NORMALIZE] {:?}: value={} sub_score={} status={}",
        indicator,
        value,
        sub_score,
        status.as_str()
    );

    NormalizedResult::scored(indicator, sub_score, status)
}
