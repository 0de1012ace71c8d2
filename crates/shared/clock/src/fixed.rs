use crashgauge_core::Timestamp;
use crashgauge_ports::Clock;

/// Clock frozen at a single instant
///
/// Used to evaluate historical snapshots and in tests, where staleness
/// checks must not depend on when the process happens to run.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: Timestamp,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
