//! Workbench tests — caller-owned parameters, recompute on edit/reset.

use agro_roi_core::{
    engine::verify_defaults,
    simulate, ParameterSet, RoiError, Workbench,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn defaults_verify() {
    init_logger();
    verify_defaults().expect("default parameter set should reproduce reference figures");
}

#[test]
fn edit_recomputes_everything() {
    init_logger();
    let mut wb = Workbench::default();
    let before = wb.latest().comparison.hydroponic.revenue;

    wb.set("hy_unit_price", "2.0").unwrap();

    let after = wb.latest().comparison.hydroponic.revenue;
    assert!((after - 38_000.0 * 2.0).abs() < 1e-6);
    assert!(after > before);
    assert_eq!(wb.latest(), &simulate(wb.params()), "result must match current parameters");
}

#[test]
fn non_numeric_edit_becomes_zero() {
    init_logger();
    let mut wb = Workbench::default();
    wb.set("hy_towers", "lots").unwrap();

    assert_eq!(wb.params().hy_towers, 0.0);
    assert_eq!(wb.latest().comparison.hydroponic.produced_per_year, 0.0);
}

#[test]
fn failed_edit_changes_nothing() {
    init_logger();
    let mut wb = Workbench::default();
    let snapshot = wb.latest().clone();

    let err = wb.set("nonexistent", "3").unwrap_err();
    assert!(matches!(err, RoiError::UnknownParameter { .. }));
    assert_eq!(wb.params(), &ParameterSet::default());
    assert_eq!(wb.latest(), &snapshot);
}

#[test]
fn reset_restores_defaults() {
    init_logger();
    let mut wb = Workbench::default();
    wb.set("surface_m2", "250").unwrap();
    wb.set("subsidy_rate_pct", "0").unwrap();

    let reset = wb.reset().clone();

    assert_eq!(wb.params(), &ParameterSet::default());
    assert_eq!(reset, simulate(&ParameterSet::default()));
}

#[test]
fn replace_swaps_parameter_set() {
    init_logger();
    let mut wb = Workbench::default();
    let params = ParameterSet {
        amortization_years: 10.0,
        ..ParameterSet::default()
    };
    let horizon = wb.replace(params.clone()).schedule.horizon();
    assert_eq!(horizon, 10);
    assert_eq!(wb.params(), &params);
}
