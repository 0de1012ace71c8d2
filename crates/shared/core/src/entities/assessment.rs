use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorId;
use crate::values::Score;

/// Severity of a single indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Safe,
    Warning,
    Danger,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Safe => "safe",
            Status::Warning => "warning",
            Status::Danger => "danger",
        }
    }
}

/// Why a reading was left out of the composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The collaborator had no value for this indicator
    NoValue,
    /// Value impossible for the indicator (e.g. negative volatility)
    OutOfDomain,
    /// Thresholds are not ordered in the indicator's adverse direction
    InconsistentThresholds,
}

/// Outcome of normalizing one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Assessment {
    Scored { sub_score: Score, status: Status },
    Unavailable { reason: UnavailableReason },
}

impl Assessment {
    pub fn is_available(&self) -> bool {
        matches!(self, Assessment::Scored { .. })
    }

    pub fn sub_score(&self) -> Option<Score> {
        match self {
            Assessment::Scored { sub_score, .. } => Some(*sub_score),
            Assessment::Unavailable { .. } => None,
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            Assessment::Scored { status, .. } => Some(*status),
            Assessment::Unavailable { .. } => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<UnavailableReason> {
        match self {
            Assessment::Scored { .. } => None,
            Assessment::Unavailable { reason } => Some(*reason),
        }
    }
}

/// Normalized view of one indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub indicator: IndicatorId,
    #[serde(flatten)]
    pub assessment: Assessment,
}

impl NormalizedResult {
    pub fn scored(indicator: IndicatorId, sub_score: Score, status: Status) -> Self {
        Self {
            indicator,
            assessment: Assessment::Scored { sub_score, status },
        }
    }

    pub fn unavailable(indicator: IndicatorId, reason: UnavailableReason) -> Self {
        Self {
            indicator,
            assessment: Assessment::Unavailable { reason },
        }
    }

    /// Is this indicator in the danger band?
    pub fn is_critical(&self) -> bool {
        self.assessment.status() == Some(Status::Danger)
    }
}
