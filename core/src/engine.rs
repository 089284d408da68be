//! The simulation engine — parameters in, comparison and schedule out.
//!
//! ORDER (fixed):
//!   1. Build both method profiles from the parameter set
//!   2. Compute each scenario
//!   3. Hydroponic return indicators and amortization schedule
//!   4. Comparison
//!
//! RULES:
//!   - `simulate` is a pure function of its input. No caching, no I/O.
//!   - The parameter set is never mutated by the engine.
//!   - A `Workbench` swaps in a complete new result on every change;
//!     nothing partial is ever stored.

use crate::{
    amortization::{horizon_years, AmortizationSchedule, ReturnIndicators},
    comparison::ComparativeResult,
    config::ParameterSet,
    error::{RoiError, RoiResult},
    profile::{GlobalTerms, MethodProfile},
    scenario::ScenarioResult,
    types::Method,
};
use serde::{Deserialize, Serialize};

/// Everything one engine run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub comparison: ComparativeResult,
    /// Cash-flow schedule of the hydroponic investment.
    pub schedule:   AmortizationSchedule,
}

pub fn run_scenario(method: Method, params: &ParameterSet) -> ScenarioResult {
    let profile = MethodProfile::for_method(method, params);
    ScenarioResult::compute(&profile, &GlobalTerms::from_params(params))
}

pub fn simulate(params: &ParameterSet) -> Simulation {
    let open_field = run_scenario(Method::OpenField, params);
    let hydroponic = run_scenario(Method::Hydroponic, params);

    let horizon = horizon_years(params.amortization_years);
    let returns = ReturnIndicators::compute(&hydroponic, params.discount_rate_pct, horizon);
    let schedule = AmortizationSchedule::build(&hydroponic, horizon);

    log::debug!(
        "simulate: PT net={:.2} Hy net={:.2} Hy payback={:?} horizon={horizon}",
        open_field.net_result,
        hydroponic.net_result,
        returns.payback_years,
    );

    Simulation {
        comparison: ComparativeResult::new(open_field, hydroponic, returns),
        schedule,
    }
}

/// Caller-side holder of the "current" parameters and their result.
pub struct Workbench {
    params: ParameterSet,
    latest: Simulation,
}

impl Workbench {
    pub fn new(params: ParameterSet) -> Self {
        let latest = simulate(&params);
        Self { params, latest }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn latest(&self) -> &Simulation {
        &self.latest
    }

    /// Edit one field from raw input text and recompute.
    /// On error neither the parameters nor the result change.
    pub fn set(&mut self, key: &str, raw: &str) -> RoiResult<&Simulation> {
        let next = self.params.with_override(key, raw)?;
        log::debug!("workbench: {key} <- {raw:?}");
        Ok(self.install(next))
    }

    pub fn replace(&mut self, params: ParameterSet) -> &Simulation {
        log::info!("workbench: parameter set replaced");
        self.install(params)
    }

    /// Restore the default parameter set.
    pub fn reset(&mut self) -> &Simulation {
        log::info!("workbench: reset to defaults");
        self.install(ParameterSet::default())
    }

    fn install(&mut self, params: ParameterSet) -> &Simulation {
        let latest = simulate(&params);
        self.params = params;
        self.latest = latest;
        &self.latest
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(ParameterSet::default())
    }
}

/// Re-derive the reference figures of the default parameter set.
pub fn verify_defaults() -> RoiResult<()> {
    let hy = run_scenario(Method::Hydroponic, &ParameterSet::default());

    let checks = [
        ("hydroponic gross investment", 65_000.0, hy.gross_investment),
        ("hydroponic cycles per year", 10.0, hy.cycles),
        ("hydroponic production per year", 40_000.0, hy.produced_per_year),
        ("hydroponic revenue", 68_400.0, hy.revenue),
        ("hydroponic net investment", 45_500.0, hy.net_investment),
    ];

    for (what, expected, actual) in checks {
        if (expected - actual).abs() > 1e-6 {
            return Err(RoiError::VerificationFailed { what, expected, actual });
        }
    }
    log::debug!("default parameter set verified");
    Ok(())
}
