//! Snapshot reading source
//!
//! A snapshot is the JSON a fetcher leaves behind: one entry per indicator
//! with its latest value and, optionally, the time it was observed and its
//! own thresholds. Entries without thresholds are completed from the
//! configured profiles.
//!
//! Staleness is decided here, outside the engine: an entry older than the
//! configured limit is passed on with no value.

use crate::error::Result;
use chrono::Duration;
use crashgauge_core::{IndicatorId, IndicatorReading, Polarity, Timestamp};
use crashgauge_ports::{Clock, ReadingSource};
use crashgauge_risk_engine::ProfileSet;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// File format written by fetchers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the snapshot was assembled
    pub as_of: Timestamp,
    #[serde(default)]
    pub readings: Vec<SnapshotEntry>,
}

/// One indicator in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub indicator: IndicatorId,
    /// null when the fetch failed
    #[serde(default)]
    pub value: Option<Decimal>,
    /// Falls back to the snapshot's `as_of`
    #[serde(default)]
    pub observed_at: Option<Timestamp>,
    #[serde(default)]
    pub historical_avg: Option<Decimal>,
    #[serde(default)]
    pub warning_level: Option<Decimal>,
    #[serde(default)]
    pub danger_level: Option<Decimal>,
    #[serde(default)]
    pub polarity: Option<Polarity>,
}

impl Snapshot {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(snapshot)
    }
}

/// [`ReadingSource`] backed by a snapshot
pub struct SnapshotSource {
    snapshot: Snapshot,
    profiles: ProfileSet,
    clock: Arc<dyn Clock>,
    max_age: Option<Duration>,
}

impl SnapshotSource {
    pub fn new(snapshot: Snapshot, profiles: ProfileSet, clock: Arc<dyn Clock>) -> Self {
        Self {
            snapshot,
            profiles,
            clock,
            max_age: None,
        }
    }

    /// Treat entries older than `max_age` as unavailable
    pub fn with_max_age(mut self, max_age: Option<Duration>) -> Self {
        self.max_age = max_age;
        self
    }

    fn is_stale(&self, observed_at: Timestamp, now: Timestamp) -> bool {
        match self.max_age {
            Some(max_age) => now - observed_at > max_age,
            None => false,
        }
    }

    /// Complete an entry into a reading; None when thresholds are unknown
    fn to_reading(&self, entry: &SnapshotEntry, now: Timestamp) -> Option<IndicatorReading> {
        let profile = self.profiles.get(entry.indicator);

        let historical_avg = entry
            .historical_avg
            .or_else(|| profile.map(|p| p.historical_avg))?;
        let warning_level = entry
            .warning_level
            .or_else(|| profile.map(|p| p.warning_level))?;
        let danger_level = entry
            .danger_level
            .or_else(|| profile.map(|p| p.danger_level))?;
        let polarity = entry.polarity.or_else(|| profile.and_then(|p| p.polarity));

        let observed_at = entry.observed_at.unwrap_or(self.snapshot.as_of);
        let value = if entry.value.is_some() && self.is_stale(observed_at, now) {
            warn!(
                "[SNAPSHOT] {:?} observed at {} is stale, passing as unavailable",
                entry.indicator, observed_at
            );
            None
        } else {
            entry.value
        };

        Some(IndicatorReading {
            indicator: entry.indicator,
            value,
            historical_avg,
            warning_level,
            danger_level,
            polarity,
        })
    }
}

impl ReadingSource for SnapshotSource {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn readings(&self) -> Vec<IndicatorReading> {
        let now = self.clock.now();
        let readings: Vec<IndicatorReading> = self
            .snapshot
            .readings
            .iter()
            .filter_map(|entry| {
                let reading = self.to_reading(entry, now);
                if reading.is_none() {
                    warn!(
                        "[SNAPSHOT] {:?} has no thresholds and no profile, skipping",
                        entry.indicator
                    );
                }
                reading
            })
            .collect();

        debug!(
            "[SNAPSHOT] {} of {} entries usable as of {}",
            readings.len(),
            self.snapshot.readings.len(),
            now
        );
        readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crashgauge_clock::FixedClock;
    use crashgauge_risk_engine::{IndicatorProfile, default_profiles};
    use rust_decimal_macros::dec;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap(),
        ))
    }

    const SNAPSHOT: &str = r#"{
        "as_of": "2024-03-04T06:00:00Z",
        "readings": [
            { "indicator": "cape", "value": 38 },
            { "indicator": "yield_curve", "value": 0.5, "observed_at": "2024-02-20T00:00:00Z" },
            { "indicator": "margin_debt", "value": null },
            { "indicator": "credit_spread", "value": 4.2, "warning_level": 4.5, "danger_level": 6 }
        ]
    }"#;

    #[test]
    fn test_fills_thresholds_from_profiles() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        let source = SnapshotSource::new(snapshot, ProfileSet::default(), clock());

        let readings = source.readings();
        assert_eq!(readings.len(), 4);

        let cape = &readings[0];
        assert_eq!(cape.value, Some(dec!(38)));
        assert_eq!(cape.danger_level, dec!(30));

        let margin = &readings[2];
        assert!(!margin.is_available());
    }

    #[test]
    fn test_entry_thresholds_override_profile() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        let source = SnapshotSource::new(snapshot, ProfileSet::default(), clock());

        let credit = &source.readings()[3];
        assert_eq!(credit.historical_avg, dec!(4.0));
        assert_eq!(credit.warning_level, dec!(4.5));
        assert_eq!(credit.danger_level, dec!(6));
    }

    #[test]
    fn test_stale_entries_become_unavailable() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        let source = SnapshotSource::new(snapshot, ProfileSet::default(), clock())
            .with_max_age(Some(Duration::hours(72)));

        let readings = source.readings();
        // Yield curve was observed two weeks before the clock
        assert!(!readings[1].is_available());
        // CAPE inherits as_of, six hours old
        assert!(readings[0].is_available());
    }

    #[test]
    fn test_no_max_age_keeps_old_entries() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        let source = SnapshotSource::new(snapshot, ProfileSet::default(), clock());
        assert!(source.readings()[1].is_available());
    }

    #[test]
    fn test_entry_without_thresholds_or_profile_is_omitted() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        let only_cape: Vec<IndicatorProfile> = default_profiles().into_iter().take(1).collect();
        let profiles = ProfileSet::new(only_cape).unwrap();
        let source = SnapshotSource::new(snapshot, profiles, clock());

        let readings = source.readings();
        let indicators: Vec<_> = readings.iter().map(|r| r.indicator).collect();
        // Yield curve and margin debt have no profile; credit spread lacks an average
        assert_eq!(indicators, vec![IndicatorId::Cape]);
    }
}
