//! Engine scenarios
//!
//! End-to-end checks of the public `evaluate` operation:
//! 1. Readings built from the default profiles
//! 2. Partial data (one indicator missing, malformed values)
//! 3. Calibration scenarios for the risk bands
//! 4. Order independence and concurrent use

use crashgauge_core::{
    Assessment, IndicatorId, IndicatorReading, RiskLevel, Status, UnavailableReason,
};
use crashgauge_risk_engine::{
    EngineConfig, ProfileSet, RiskEngine, WeightTableConfig, default_profiles,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn reading(indicator: IndicatorId, value: Decimal) -> IndicatorReading {
    ProfileSet::default()
        .reading(indicator, Some(value))
        .expect("default profile")
}

/// CAPE in danger, Buffett in warning, margin debt unavailable, rest safe
fn mixed_scenario() -> Vec<IndicatorReading> {
    vec![
        reading(IndicatorId::Cape, dec!(38)),
        reading(IndicatorId::YieldCurve, dec!(0.5)),
        reading(IndicatorId::MarginDebt, dec!(2.2)).without_value(),
        reading(IndicatorId::CreditSpread, dec!(4.2)),
        reading(IndicatorId::BuffettIndicator, dec!(145)),
        reading(IndicatorId::VolatilityIndex, dec!(18)),
    ]
}

/// Every permutation of a slice (Heap's algorithm)
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            heap(k - 1, items, out);
        }
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    let len = items.len();
    heap(len, &mut items, &mut out);
    out
}

#[test]
fn test_mixed_scenario() {
    let _ = env_logger::try_init();

    let engine = RiskEngine::default();
    let breakdown = engine.evaluate(&mixed_scenario());

    // Exactly one indicator (CAPE) in danger
    assert_eq!(breakdown.critical_warnings, 1);
    let statuses: Vec<_> = breakdown
        .indicators
        .iter()
        .map(|d| (d.indicator, d.assessment.status()))
        .collect();
    assert_eq!(
        statuses,
        vec![
            (IndicatorId::Cape, Some(Status::Danger)),
            (IndicatorId::YieldCurve, Some(Status::Safe)),
            (IndicatorId::MarginDebt, None),
            (IndicatorId::CreditSpread, Some(Status::Safe)),
            (IndicatorId::BuffettIndicator, Some(Status::Warning)),
            (IndicatorId::VolatilityIndex, Some(Status::Safe)),
        ]
    );

    // Composite over the five available indicators only:
    // CAPE 100, yield curve 25, credit spread 10, Buffett 81.25, VIX 0
    let expected = (dec!(0.25) * dec!(100)
        + dec!(0.15) * dec!(25)
        + dec!(0.15) * dec!(10)
        + dec!(0.20) * dec!(81.25)
        + dec!(0.15) * dec!(0))
        / dec!(0.90);
    assert_eq!(breakdown.total_score, expected);
    assert_eq!(breakdown.available_indicators, 5);
    assert_eq!(breakdown.coverage, dec!(0.9));
    assert!(!breakdown.insufficient_data);

    assert!(matches!(
        breakdown.risk_level,
        Some(RiskLevel::Moderate) | Some(RiskLevel::Elevated)
    ));
    assert_eq!(breakdown.risk_level, Some(RiskLevel::Elevated));
}

#[test]
fn test_all_at_danger_is_extreme() {
    let engine = RiskEngine::default();
    let readings: Vec<_> = default_profiles()
        .iter()
        .map(|p| p.reading(Some(p.danger_level)))
        .collect();

    let breakdown = engine.evaluate(&readings);

    assert_eq!(breakdown.total_score, dec!(100));
    assert_eq!(breakdown.risk_level, Some(RiskLevel::Extreme));
    assert_eq!(breakdown.critical_warnings, 6);
    assert_eq!(breakdown.coverage, Decimal::ONE);
}

#[test]
fn test_all_at_average_is_low() {
    let engine = RiskEngine::default();
    let readings: Vec<_> = default_profiles()
        .iter()
        .map(|p| p.reading(Some(p.historical_avg)))
        .collect();

    let breakdown = engine.evaluate(&readings);

    assert_eq!(breakdown.total_score, Decimal::ZERO);
    assert_eq!(breakdown.risk_level, Some(RiskLevel::Low));
    assert_eq!(breakdown.critical_warnings, 0);
    for detail in &breakdown.indicators {
        assert_eq!(
            detail.assessment,
            Assessment::Scored {
                sub_score: Decimal::ZERO,
                status: Status::Safe,
            }
        );
    }
}

#[test]
fn test_all_at_warning_is_elevated() {
    let engine = RiskEngine::default();
    let readings: Vec<_> = default_profiles()
        .iter()
        .map(|p| p.reading(Some(p.warning_level)))
        .collect();

    let breakdown = engine.evaluate(&readings);
    assert_eq!(breakdown.total_score, dec!(50));
    assert_eq!(breakdown.risk_level, Some(RiskLevel::Elevated));
    assert_eq!(breakdown.critical_warnings, 0);
}

#[test]
fn test_empty_is_insufficient_data() {
    let engine = RiskEngine::default();
    let breakdown = engine.evaluate(&[]);

    assert!(breakdown.insufficient_data);
    assert_eq!(breakdown.total_score, Decimal::ZERO);
    assert_eq!(breakdown.risk_level, None);
    assert_eq!(breakdown.headline(), "Data unavailable");
}

#[test]
fn test_only_malformed_readings_is_insufficient_data() {
    let engine = RiskEngine::default();
    let profiles = ProfileSet::default();
    let readings = vec![
        IndicatorReading::from_f64(IndicatorId::Cape, f64::NAN, dec!(17), dec!(25), dec!(30)),
        profiles
            .reading(IndicatorId::VolatilityIndex, Some(dec!(-12)))
            .unwrap(),
        profiles.reading(IndicatorId::MarginDebt, None).unwrap(),
    ];

    let breakdown = engine.evaluate(&readings);
    assert!(breakdown.insufficient_data);
    assert_eq!(breakdown.critical_warnings, 0);

    let vix = breakdown.detail(IndicatorId::VolatilityIndex).unwrap();
    assert_eq!(
        vix.assessment,
        Assessment::Unavailable {
            reason: UnavailableReason::OutOfDomain
        }
    );
}

#[test]
fn test_malformed_value_does_not_dominate() {
    let engine = RiskEngine::default();
    let mut readings: Vec<_> = default_profiles()
        .iter()
        .map(|p| p.reading(Some(p.historical_avg)))
        .collect();
    // A corrupt feed reports a negative VIX
    readings[5] = reading(IndicatorId::VolatilityIndex, dec!(-999));

    let breakdown = engine.evaluate(&readings);
    assert_eq!(breakdown.total_score, Decimal::ZERO);
    assert_eq!(breakdown.available_indicators, 5);
}

#[test]
fn test_one_missing_equals_renormalized_average() {
    let engine = RiskEngine::default();
    let full = vec![
        reading(IndicatorId::Cape, dec!(27)),
        reading(IndicatorId::YieldCurve, dec!(-0.2)),
        reading(IndicatorId::MarginDebt, dec!(2.8)),
        reading(IndicatorId::CreditSpread, dec!(6)),
        reading(IndicatorId::BuffettIndicator, dec!(110)),
        reading(IndicatorId::VolatilityIndex, dec!(30)),
    ];
    let complete = engine.evaluate(&full);

    for missing in IndicatorId::ALL {
        let partial: Vec<_> = full
            .iter()
            .filter(|r| r.indicator != missing)
            .cloned()
            .collect();
        let breakdown = engine.evaluate(&partial);

        let mut weighted = Decimal::ZERO;
        let mut total_weight = Decimal::ZERO;
        for detail in complete.indicators.iter().filter(|d| d.indicator != missing) {
            let weight = engine.weights().weight(detail.indicator);
            weighted += weight * detail.assessment.sub_score().unwrap();
            total_weight += weight;
        }

        assert_eq!(
            breakdown.total_score,
            weighted / total_weight,
            "missing {:?}",
            missing
        );
    }
}

#[test]
fn test_order_independent_over_all_permutations() {
    let engine = RiskEngine::default();
    let readings = mixed_scenario();
    let expected = engine.evaluate(&readings);

    let all = permutations(&readings);
    assert_eq!(all.len(), 720);
    for permuted in all {
        assert_eq!(engine.evaluate(&permuted), expected);
    }
}

#[test]
fn test_deterministic_across_threads() {
    let engine = RiskEngine::default();
    let readings = mixed_scenario();
    let expected = engine.evaluate(&readings);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| engine.evaluate(&readings)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_weights_summing_to_point_nine_fail_at_startup() {
    let mut weights = WeightTableConfig::default();
    weights.weights.insert(IndicatorId::MarginDebt, Decimal::ZERO);
    let config = EngineConfig {
        weights,
        ..Default::default()
    };
    assert!(RiskEngine::new(config).is_err());
}

#[test]
fn test_retuned_weights_change_score_not_algorithm() {
    let mut weights = WeightTableConfig::default();
    weights.version = "valuation-heavy".to_string();
    weights.weights.insert(IndicatorId::Cape, dec!(0.50));
    weights.weights.insert(IndicatorId::VolatilityIndex, dec!(0.05));
    weights.weights.insert(IndicatorId::CreditSpread, dec!(0.05));
    weights.weights.insert(IndicatorId::YieldCurve, dec!(0.10));
    weights.weights.insert(IndicatorId::BuffettIndicator, dec!(0.20));
    weights.weights.insert(IndicatorId::MarginDebt, dec!(0.10));
    let engine = RiskEngine::new(EngineConfig {
        weights,
        ..Default::default()
    })
    .unwrap();

    let breakdown = engine.evaluate(&mixed_scenario());
    assert_eq!(breakdown.weight_table_version, "valuation-heavy");
    assert!(breakdown.total_score > RiskEngine::default().evaluate(&mixed_scenario()).total_score);
}

#[test]
fn test_breakdown_serializes() {
    let engine = RiskEngine::default();
    let breakdown = engine.evaluate(&mixed_scenario());

    let json = serde_json::to_value(&breakdown).unwrap();
    assert_eq!(json["risk_level"], "elevated");
    assert_eq!(json["critical_warnings"], 1);
    assert_eq!(json["indicators"][2]["indicator"], "margin_debt");
    assert_eq!(json["indicators"][2]["assessment"]["state"], "unavailable");
    assert_eq!(json["indicators"][2]["assessment"]["reason"], "no_value");

    let back: crashgauge_core::RiskBreakdown = serde_json::from_value(json).unwrap();
    assert_eq!(back, breakdown);
}
