//! Crashgauge Runner
//!
//! Collaborator plumbing around the risk engine:
//!
//! - **Config**: weight table, risk bands, indicator profiles, staleness policy
//! - **Snapshot**: file-backed reading source written by fetchers
//! - **Report**: JSON or text rendering of a breakdown
//!
//! ## Flow
//!
//! ```text
//!   crashgauge.json ──► RunnerConfig ──► RiskEngine + ProfileSet
//!                                              │
//!   snapshot.json ──► SnapshotSource ──────────┤ (stale → unavailable)
//!                                              ▼
//!                                        RiskBreakdown ──► report
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod snapshot;

// Re-export main types
pub use config::{RunnerConfig, load_config, load_config_from_str, load_default_config};
pub use error::{LoadError, Result};
pub use report::{OutputFormat, render, render_text};
pub use snapshot::{Snapshot, SnapshotEntry, SnapshotSource};
