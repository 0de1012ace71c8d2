//! Crashgauge Clock Infrastructure
//!
//! Time sources for the collaborators around the engine:
//!
//! - [`SystemClock`]: wall-clock time for live runs
//! - [`FixedClock`]: a frozen instant for replaying snapshots and tests

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use crashgauge_ports::Clock;
