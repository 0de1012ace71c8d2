use chrono::Utc;
use crashgauge_core::Timestamp;
use crashgauge_ports::Clock;

/// Wall-clock time, used by the CLI when no `--at` instant is given
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
