use crashgauge_core::IndicatorReading;

/// Port for a collaborator that supplies indicator readings
///
/// Implementations fetch or load each indicator independently. An indicator
/// that failed to load is either omitted or passed with no value; it must
/// never be replaced by a made-up "safe" reading.
pub trait ReadingSource: Send + Sync {
    /// Source name for logs
    fn name(&self) -> &str;

    /// Current readings, zero or more
    fn readings(&self) -> Vec<IndicatorReading>;
}
