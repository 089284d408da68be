//! Comparator tests — paired diffs, direction flags and cross metrics.

use agro_roi_core::{
    comparison::Metric,
    simulate,
    types::{CostCategory, LaborOperation},
    ParameterSet,
};

#[test]
fn every_diff_is_hy_minus_pt() {
    let sim = simulate(&ParameterSet::default());
    let cmp = &sim.comparison;

    assert_eq!(cmp.diffs.len(), Metric::all().len());
    for d in &cmp.diffs {
        assert_eq!(d.pt, d.metric.value(&cmp.open_field), "{:?}", d.metric);
        assert_eq!(d.hy, d.metric.value(&cmp.hydroponic), "{:?}", d.metric);
        assert_eq!(d.diff, d.hy - d.pt, "{:?}", d.metric);
    }
}

#[test]
fn costs_and_investment_are_lower_is_better() {
    let sim = simulate(&ParameterSet::default());
    let cmp = &sim.comparison;

    for m in [
        Metric::TotalCosts,
        Metric::Cost(CostCategory::Fertilizer),
        Metric::LaborCost(LaborOperation::Harvest),
        Metric::GrossInvestment,
        Metric::NetInvestment,
        Metric::Depreciation,
        Metric::UnitCost,
    ] {
        assert!(cmp.diff(m).unwrap().lower_is_better, "{m:?}");
    }
    for m in [
        Metric::Revenue,
        Metric::GrossMargin,
        Metric::NetResult,
        Metric::GrossMarginRate,
        Metric::NetProfitabilityRate,
    ] {
        assert!(!cmp.diff(m).unwrap().lower_is_better, "{m:?}");
    }
}

/// Hydroponics costs more to build: an unfavorable positive diff on a
/// lower-is-better metric, stored unsigned by favorability.
#[test]
fn investment_diff_is_unfavorable_but_positive() {
    let sim = simulate(&ParameterSet::default());
    let d = sim.comparison.diff(Metric::GrossInvestment).unwrap();

    assert!(d.diff > 0.0);
    assert_eq!(d.favorable(), Some(false));

    let revenue = sim.comparison.diff(Metric::Revenue).unwrap();
    assert!(revenue.diff > 0.0);
    assert_eq!(revenue.favorable(), Some(true));
}

#[test]
fn production_multiplier_and_labor_reduction() {
    let sim = simulate(&ParameterSet::default());
    let cmp = &sim.comparison;

    let expected = 38_000.0 / 5_880.0;
    assert!((cmp.production_multiplier - expected).abs() < 1e-9);

    // PT: 6 cycles × 38 h = 228 h, Hy: 10 cycles × 14 h = 140 h
    let expected_reduction = (1.0 - 140.0 / 228.0) * 100.0;
    assert!(
        (cmp.labor_reduction_pct - expected_reduction).abs() < 1e-9,
        "labor reduction {:.3}% expected {:.3}%",
        cmp.labor_reduction_pct,
        expected_reduction
    );
}

#[test]
fn cross_metrics_guard_against_empty_open_field() {
    let params = ParameterSet {
        pt_sell_through_pct: 0.0,
        pt_labor_soil_prep: 0.0,
        pt_labor_planting: 0.0,
        pt_labor_weeding: 0.0,
        pt_labor_harvest: 0.0,
        pt_labor_maintenance: 0.0,
        ..ParameterSet::default()
    };
    let sim = simulate(&params);
    assert_eq!(sim.comparison.production_multiplier, 0.0);
    assert_eq!(sim.comparison.labor_reduction_pct, 0.0);
}
