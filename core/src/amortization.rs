//! Multi-year cash-flow schedule and investment-return indicators.
//!
//! Every projected year repeats the steady-state figures of the
//! scenario. Cash flow is the gross margin; depreciation is a non-cash
//! charge and only appears in the net result row.

use crate::{
    scenario::ScenarioResult,
    types::{Money, Percent},
};
use serde::{Deserialize, Serialize};

pub const MAX_HORIZON_YEARS: usize = 100;

/// Schedule length for an amortization duration given in years.
pub fn horizon_years(amortization_years: f64) -> usize {
    if amortization_years.is_nan() || amortization_years < 1.0 {
        return 0;
    }
    let years = amortization_years.floor();
    if years > MAX_HORIZON_YEARS as f64 {
        log::warn!(
            "amortization duration {amortization_years} capped to {MAX_HORIZON_YEARS} schedule years"
        );
        return MAX_HORIZON_YEARS;
    }
    years as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleYear {
    pub year:                 usize,
    pub investment:           Money,
    pub revenue:              Money,
    pub operating_costs:      Money,
    pub depreciation:         Money,
    pub net_result:           Money,
    pub cash_flow:            Money,
    pub cumulative_cash_flow: Money,
    /// Cumulative cash flow over gross investment.
    pub cumulative_roi:       f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub years: Vec<ScheduleYear>,
}

impl AmortizationSchedule {
    /// Year 0 carries the net investment outflow; years 1..=horizon
    /// repeat the scenario's annual figures.
    pub fn build(scenario: &ScenarioResult, horizon: usize) -> Self {
        let roi = |cumulative: Money| {
            if scenario.gross_investment > 0.0 {
                cumulative / scenario.gross_investment
            } else {
                0.0
            }
        };

        let mut years = Vec::with_capacity(horizon + 1);
        let mut cumulative = -scenario.net_investment;
        years.push(ScheduleYear {
            year: 0,
            investment: -scenario.net_investment,
            revenue: 0.0,
            operating_costs: 0.0,
            depreciation: 0.0,
            net_result: 0.0,
            cash_flow: -scenario.net_investment,
            cumulative_cash_flow: cumulative,
            cumulative_roi: roi(cumulative),
        });

        for year in 1..=horizon {
            let revenue = scenario.revenue;
            let operating_costs = scenario.total_costs;
            let depreciation = scenario.depreciation;
            let cash_flow = revenue - operating_costs;
            cumulative += cash_flow;
            years.push(ScheduleYear {
                year,
                investment: 0.0,
                revenue,
                operating_costs,
                depreciation,
                net_result: revenue - operating_costs - depreciation,
                cash_flow,
                cumulative_cash_flow: cumulative,
                cumulative_roi: roi(cumulative),
            });
        }

        Self { years }
    }

    pub fn horizon(&self) -> usize {
        self.years.len().saturating_sub(1)
    }

    pub fn final_cumulative_cash_flow(&self) -> Money {
        self.years.last().map(|y| y.cumulative_cash_flow).unwrap_or(0.0)
    }

    /// First year in which the cumulative cash flow is no longer negative.
    pub fn break_even_year(&self) -> Option<usize> {
        self.years
            .iter()
            .find(|y| y.cumulative_cash_flow >= 0.0)
            .map(|y| y.year)
    }
}

/// Payback, NPV and debt coverage for one scenario. `None` means
/// "not applicable".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnIndicators {
    pub payback_years: Option<f64>,
    pub npv:           Option<Money>,
    pub debt_coverage: Option<f64>,
}

impl ReturnIndicators {
    pub fn compute(scenario: &ScenarioResult, discount_rate_pct: Percent, horizon: usize) -> Self {
        let cash_flow = scenario.gross_margin;

        let payback_years = if cash_flow > 0.0 {
            Some(scenario.net_investment / cash_flow)
        } else {
            None
        };

        let debt_coverage = if scenario.depreciation > 0.0 {
            Some(cash_flow / scenario.depreciation)
        } else {
            None
        };

        Self {
            payback_years,
            npv: net_present_value(scenario.net_investment, cash_flow, discount_rate_pct, horizon),
            debt_coverage,
        }
    }
}

/// NPV of a constant annual cash flow over `horizon` years after an
/// upfront investment. `None` when the discount factor base is not
/// positive.
pub fn net_present_value(
    investment: Money,
    annual_cash_flow: Money,
    discount_rate_pct: Percent,
    horizon: usize,
) -> Option<Money> {
    let base = 1.0 + discount_rate_pct / 100.0;
    if base <= 0.0 {
        return None;
    }
    let mut npv = -investment;
    for year in 1..=horizon {
        npv += annual_cash_flow / base.powi(year as i32);
    }
    Some(npv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_truncates_and_caps() {
        assert_eq!(horizon_years(5.0), 5);
        assert_eq!(horizon_years(5.9), 5);
        assert_eq!(horizon_years(0.0), 0);
        assert_eq!(horizon_years(-3.0), 0);
        assert_eq!(horizon_years(f64::NAN), 0);
        assert_eq!(horizon_years(1e9), MAX_HORIZON_YEARS);
    }

    #[test]
    fn npv_at_zero_rate_is_plain_sum() {
        let npv = net_present_value(1_000.0, 300.0, 0.0, 5).unwrap();
        assert!((npv - 500.0).abs() < 1e-9);
    }

    #[test]
    fn npv_undefined_for_rate_at_minus_hundred() {
        assert_eq!(net_present_value(1_000.0, 300.0, -100.0, 5), None);
    }
}
