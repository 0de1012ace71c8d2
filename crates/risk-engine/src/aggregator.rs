//! Score Aggregation
//!
//! Combines normalized sub-scores into one composite score.
//!
//! ## Renormalization
//!
//! Only available indicators take part, and their weights are rescaled to
//! sum to one:
//!
//! ```text
//! composite = Σ(w_i * s_i) / Σ(w_i)      over available i
//! ```
//!
//! A missing indicator therefore does not drag the composite towards zero:
//! the score is "risk given what we know".
//!
//! ## Ordering
//!
//! Results are keyed by indicator and summed in canonical indicator order,
//! so the composite never depends on the order readings arrived in.

use crate::weights::WeightTable;
use crashgauge_core::{Assessment, IndicatorId, NormalizedResult, Score, Weight};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::normalizer::MAX_SCORE;

/// Composite score, or the explicit insufficient-data state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CompositeScore {
    Scored {
        /// Weighted, renormalized score in [0, 100]
        score: Score,
        /// Share of table weight carried by available indicators, in [0, 1]
        coverage: Decimal,
    },
    InsufficientData,
}

impl CompositeScore {
    /// Score value, zero when data is insufficient
    pub fn value(&self) -> Score {
        match self {
            CompositeScore::Scored { score, .. } => *score,
            CompositeScore::InsufficientData => Decimal::ZERO,
        }
    }

    pub fn coverage(&self) -> Decimal {
        match self {
            CompositeScore::Scored { coverage, .. } => *coverage,
            CompositeScore::InsufficientData => Decimal::ZERO,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, CompositeScore::InsufficientData)
    }
}

/// How one indicator contributed to the composite
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreContribution {
    pub result: NormalizedResult,
    /// Weight from the table
    pub weight: Weight,
    /// Weight after renormalization (zero when unavailable)
    pub effective_weight: Weight,
    /// effective_weight * sub_score
    pub weighted_contribution: Score,
}

/// Composite score together with the per-indicator contributions
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub composite: CompositeScore,
    /// Canonical order, one entry per distinct indicator
    pub contributions: Vec<ScoreContribution>,
}

/// Aggregate normalized results into a composite score
pub fn aggregate(results: &[NormalizedResult], weights: &WeightTable) -> CompositeScore {
    aggregate_detailed(results, weights).composite
}

/// Aggregate and keep the per-indicator contributions
pub fn aggregate_detailed(results: &[NormalizedResult], weights: &WeightTable) -> Aggregation {
    let resolved = resolve_duplicates(results);

    let mut weighted_sum = Decimal::ZERO;
    let mut present_weight = Decimal::ZERO;
    let mut present_count = 0usize;

    for result in &resolved {
        if let Some(sub_score) = result.assessment.sub_score() {
            let weight = weights.weight(result.indicator);
            weighted_sum += weight * sub_score;
            present_weight += weight;
            present_count += 1;
        }
    }

    let composite = if present_weight.is_zero() {
        debug!(
            "[AGGREGATE] No usable weight ({} available indicators), insufficient data",
            present_count
        );
        CompositeScore::InsufficientData
    } else {
        let score = (weighted_sum / present_weight).clamp(Decimal::ZERO, MAX_SCORE);
        let table_total = weights.total();
        let coverage = if table_total.is_zero() {
            Decimal::ZERO
        } else {
            (present_weight / table_total).min(Decimal::ONE)
        };
        debug!(
            "[AGGREGATE] score={} over {} indicators (coverage {})",
            score, present_count, coverage
        );
        CompositeScore::Scored { score, coverage }
    };

    let contributions = resolved
        .into_iter()
        .map(|result| {
            let weight = weights.weight(result.indicator);
            let (effective_weight, weighted_contribution) =
                match (result.assessment.sub_score(), composite) {
                    (Some(sub_score), CompositeScore::Scored { .. }) => {
                        let effective = weight / present_weight;
                        (effective, effective * sub_score)
                    }
                    _ => (Decimal::ZERO, Decimal::ZERO),
                };
            ScoreContribution {
                result,
                weight,
                effective_weight,
                weighted_contribution,
            }
        })
        .collect();

    Aggregation {
        composite,
        contributions,
    }
}

/// Collapse the input to one result per indicator, in canonical order
///
/// When an indicator appears more than once the most adverse scored result
/// wins, so the outcome does not depend on input order.
pub fn resolve_duplicates(results: &[NormalizedResult]) -> Vec<NormalizedResult> {
    let mut by_indicator: BTreeMap<IndicatorId, NormalizedResult> = BTreeMap::new();

    for result in results {
        by_indicator
            .entry(result.indicator)
            .and_modify(|existing| {
                if adversity(result, existing) == Ordering::Greater {
                    *existing = *result;
                }
            })
            .or_insert(*result);
    }

    by_indicator.into_values().collect()
}

/// Total order on results for the same indicator: scored beats unavailable,
/// then higher sub-score, then higher status
fn adversity(a: &NormalizedResult, b: &NormalizedResult) -> Ordering {
    match (&a.assessment, &b.assessment) {
        (
            Assessment::Scored {
                sub_score: sa,
                status: ta,
            },
            Assessment::Scored {
                sub_score: sb,
                status: tb,
            },
        ) => sa.cmp(sb).then(ta.cmp(tb)),
        (Assessment::Scored { .. }, Assessment::Unavailable { .. }) => Ordering::Greater,
        (Assessment::Unavailable { .. }, Assessment::Scored { .. }) => Ordering::Less,
        (Assessment::Unavailable { reason: ra }, Assessment::Unavailable { reason: rb }) => {
            ra.cmp(rb)
        }
    }
}
