//! Breakdown rendering for the command line

use crashgauge_core::{Assessment, RiskBreakdown, UnavailableReason};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON breakdown
    #[default]
    Json,
    /// Human-readable table
    Text,
}

/// Render a breakdown in the requested format
pub fn render(breakdown: &RiskBreakdown, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(breakdown),
        OutputFormat::Text => Ok(render_text(breakdown)),
    }
}

/// Plain-text report
pub fn render_text(breakdown: &RiskBreakdown) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Crash risk: {}", breakdown.headline());
    if let Some(level) = breakdown.risk_level {
        let _ = writeln!(out, "  {}", level.summary());
    }
    let _ = writeln!(
        out,
        "Coverage: {}% of weight ({} indicators), weights v{}",
        (breakdown.coverage * dec!(100)).round_dp(1),
        breakdown.available_indicators,
        breakdown.weight_table_version
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<26} {:<4} {:>9} {:<9} {:>7} {:>9}",
        "Indicator", "Unit", "Score", "Status", "Weight", "Contrib"
    );

    for detail in &breakdown.indicators {
        let (score, status) = match detail.assessment {
            Assessment::Scored { sub_score, status } => {
                (sub_score.round_dp(1).to_string(), status.as_str().to_string())
            }
            Assessment::Unavailable { reason } => ("-".to_string(), unavailable_label(reason)),
        };
        let _ = writeln!(
            out,
            "{:<26} {:<4} {:>9} {:<9} {:>7} {:>9}",
            detail.indicator.display_name(),
            detail.indicator.unit(),
            score,
            status,
            percent(detail.effective_weight),
            detail.contribution.round_dp(2)
        );
    }

    out
}

fn unavailable_label(reason: UnavailableReason) -> String {
    match reason {
        UnavailableReason::NoValue => "n/a".to_string(),
        UnavailableReason::OutOfDomain => "invalid".to_string(),
        UnavailableReason::InconsistentThresholds => "misconf".to_string(),
    }
}

fn percent(weight: Decimal) -> String {
    format!("{}%", (weight * dec!(100)).round_dp(1))
}
