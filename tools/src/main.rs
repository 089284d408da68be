//! roi-runner: headless runner for the open-field vs hydroponic ROI engine.
//!
//! Usage:
//!   roi-runner --params data/parameters.json
//!   roi-runner --set hy_towers=120 --set hy_unit_price=2.1
//!   roi-runner --json > report.json
//!   roi-runner --list-params

use agro_roi_core::{
    comparison::{ComparativeResult, MetricDiff},
    engine::{simulate, verify_defaults, Simulation},
    ParameterSet,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::env;
use std::path::Path;

const DEFAULT_PARAMS: &str = "./data/parameters.json";

#[derive(serde::Serialize)]
struct Report<'a> {
    generated_at: DateTime<Utc>,
    parameters:   &'a ParameterSet,
    #[serde(flatten)]
    simulation:   &'a Simulation,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--list-params") {
        for name in ParameterSet::field_names() {
            println!("{name}");
        }
        return Ok(());
    }

    verify_defaults()?;

    let json_mode = args.iter().any(|a| a == "--json");
    let params_path = args
        .windows(2)
        .find(|w| w[0] == "--params")
        .map(|w| w[1].as_str());
    let assignments: Vec<&str> = args
        .windows(2)
        .filter(|w| w[0] == "--set")
        .map(|w| w[1].as_str())
        .collect();

    let (mut params, source) = load_params(params_path)?;
    params.apply_assignments(assignments.iter().copied())?;

    let simulation = simulate(&params);

    if json_mode {
        let report = Report {
            generated_at: Utc::now(),
            parameters:   &params,
            simulation:   &simulation,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("roi-runner: open field vs hydroponic towers");
    println!("  parameters: {source}");
    if !assignments.is_empty() {
        println!("  overrides:  {}", assignments.join(", "));
    }
    println!();
    print_kpis(&simulation.comparison);
    print_comparison(&simulation.comparison);
    print_schedule(&simulation);
    Ok(())
}

/// An explicit path must exist; the default path falls back to the
/// built-in defaults when absent.
fn load_params(path: Option<&str>) -> Result<(ParameterSet, String)> {
    match path {
        Some(p) => Ok((ParameterSet::load(p)?, p.to_string())),
        None if Path::new(DEFAULT_PARAMS).exists() => {
            Ok((ParameterSet::load(DEFAULT_PARAMS)?, DEFAULT_PARAMS.to_string()))
        }
        None => {
            log::warn!("{DEFAULT_PARAMS} not found, using built-in defaults");
            Ok((ParameterSet::default(), "built-in defaults".to_string()))
        }
    }
}

fn print_kpis(cmp: &ComparativeResult) {
    let pt = &cmp.open_field;
    let hy = &cmp.hydroponic;
    let r = &cmp.returns;

    println!("=== KEY FIGURES ===");
    println!("  Hy investment (net):  {} ({} gross)", eur(hy.net_investment), eur(hy.gross_investment));
    println!("  PT investment:        {}", eur(pt.gross_investment));
    println!("  Hy payback:           {}", optional(r.payback_years, |v| format!("{v:.1} years")));
    println!("  Hy net result:        {}", eur(hy.net_result));
    println!("  Hy NPV:               {}", optional(r.npv, eur));
    println!("  Hy debt coverage:     {}", optional(r.debt_coverage, |v| format!("{v:.2}x")));
    println!("  Net result Hy - PT:   {}", signed_eur(hy.net_result - pt.net_result));
    println!("  Production multiplier {:.2}x", cmp.production_multiplier);
    println!("  Labor hours saved:    {:.1}%", cmp.labor_reduction_pct);
    println!("  Unit cost PT / Hy:    {:.3} / {:.3}", pt.unit_cost, hy.unit_cost);
    println!();
}

fn print_comparison(cmp: &ComparativeResult) {
    println!("=== OPERATING ACCOUNT ===");
    println!("  {:<32} {:>14} {:>14} {:>14}", "", "PT", "Hy", "Hy - PT");
    for d in &cmp.diffs {
        println!(
            "  {:<32} {:>14} {:>14} {:>14} {}",
            d.metric.label(),
            figure(d, d.pt),
            figure(d, d.hy),
            figure(d, d.diff),
            match d.favorable() {
                Some(true)  => "+",
                Some(false) => "-",
                None        => " ",
            }
        );
    }
    println!();
}

fn print_schedule(sim: &Simulation) {
    println!("=== HYDROPONIC AMORTIZATION ===");
    println!(
        "  {:>4} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>8}",
        "year", "invest", "revenue", "op. costs", "deprec.", "net", "cash flow", "cumulative", "ROI"
    );
    for y in &sim.schedule.years {
        println!(
            "  {:>4} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>7.1}%",
            y.year,
            y.investment,
            y.revenue,
            -y.operating_costs,
            -y.depreciation,
            y.net_result,
            y.cash_flow,
            y.cumulative_cash_flow,
            y.cumulative_roi * 100.0,
        );
    }
    match sim.schedule.break_even_year() {
        Some(year) => println!("  break-even in year {year}"),
        None => println!("  no break-even within {} years", sim.schedule.horizon()),
    }
}

fn figure(d: &MetricDiff, v: f64) -> String {
    if d.metric.is_currency() {
        format!("{v:.0} €")
    } else {
        format!("{v:.0}")
    }
}

fn eur(v: f64) -> String {
    format!("{v:.0} €")
}

fn signed_eur(v: f64) -> String {
    if v > 0.0 {
        format!("+{v:.0} €")
    } else {
        eur(v)
    }
}

fn optional(value: Option<f64>, fmt: impl Fn(f64) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| "N/A".to_string())
}
