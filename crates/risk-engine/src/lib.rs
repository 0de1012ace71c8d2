//! Crashgauge Risk Engine
//!
//! Turns independently-sourced market indicators into one composite
//! crash-risk assessment:
//!
//! - **Normalizer**: reading → sub-score (0-100) and status
//! - **Weight Table**: versioned indicator weights summing to 1.0
//! - **Aggregator**: weighted average renormalized over available indicators
//! - **Classifier**: composite → risk level, plus critical warning count
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Risk Engine                          │
//! │                                                             │
//! │  Readings ───► Normalizer ───► (sub-score, status) / n.a.   │
//! │                                        │                    │
//! │  Weight Table ───────────────► Aggregator ───► Composite    │
//! │                                                    │        │
//! │  Risk Bands ─────────────────────────────► Classifier       │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                        RiskBreakdown
//! ```
//!
//! ## Failure Model
//!
//! | Problem | Handling |
//! |---------|----------|
//! | Missing / impossible reading | Excluded, listed as unavailable |
//! | No usable reading | Insufficient-data breakdown, score 0 |
//! | Bad weights or bands | `ConfigError` when the engine is built |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crashgauge_risk_engine::{EngineConfig, ProfileSet, RiskEngine};
//!
//! let engine = RiskEngine::new(EngineConfig::default())?;
//! let profiles = ProfileSet::default();
//! let readings = vec![profiles.reading(IndicatorId::Cape, Some(dec!(38))).unwrap()];
//!
//! let breakdown = engine.evaluate(&readings);
//! println!("{}", breakdown.headline());
//! ```

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod normalizer;
pub mod profiles;
pub mod weights;

// Re-export main types
pub use aggregator::{Aggregation, CompositeScore, ScoreContribution, aggregate, aggregate_detailed};
pub use classifier::{Classification, RiskBands, classify};
pub use config::EngineConfig;
pub use engine::RiskEngine;
pub use normalizer::normalize;
pub use profiles::{IndicatorProfile, ProfileSet, default_profiles};
pub use weights::{WeightTable, WeightTableConfig};
