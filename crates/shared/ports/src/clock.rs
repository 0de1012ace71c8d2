use crashgauge_core::Timestamp;

/// Port for time abstraction
///
/// The engine itself never reads the time. Collaborators use a clock to
/// decide whether a reading is fresh enough to hand to it:
/// - Real system time in production
/// - Fixed time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
