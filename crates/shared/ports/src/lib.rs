//! Crashgauge Ports
//!
//! Port definitions (traits) and shared error types for the risk engine.
//! These define the boundaries between the pure scoring core and the
//! collaborators that feed it.

mod clock;
mod error;
mod source;

pub use clock::Clock;
pub use error::{ConfigError, ConfigResult};
pub use source::ReadingSource;
