mod assessment;
mod breakdown;

pub use assessment::{Assessment, NormalizedResult, Status, UnavailableReason};
pub use breakdown::{IndicatorDetail, RiskBreakdown, RiskLevel};
