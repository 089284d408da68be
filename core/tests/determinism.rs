//! Two runs over the same parameter set must be bit-identical.
//! The engine keeps no state between calls.

use agro_roi_core::{simulate, ParameterSet};

#[test]
fn same_parameters_produce_identical_results() {
    let params = ParameterSet::default();

    let a = simulate(&params);
    let b = simulate(&params);

    assert_eq!(a, b);

    let json_a = serde_json::to_string(&a).expect("serialize a");
    let json_b = serde_json::to_string(&b).expect("serialize b");
    assert_eq!(json_a, json_b, "serialized results diverged");
}

#[test]
fn engine_does_not_touch_its_input() {
    let params = ParameterSet::default();
    let before = params.clone();
    let _ = simulate(&params);
    assert_eq!(params, before);
}

/// A run in between with other parameters leaves no trace.
#[test]
fn interleaved_runs_do_not_leak() {
    let base = ParameterSet::default();
    let other = ParameterSet {
        hy_towers: 250.0,
        weeks_per_year: 52.0,
        ..ParameterSet::default()
    };

    let first = simulate(&base);
    let _ = simulate(&other);
    let second = simulate(&base);

    assert_eq!(first, second);
}
