//! Side-by-side comparison of the two scenarios.
//!
//! Every paired figure is diffed as `hy - pt`. Whether a positive diff
//! is good news depends on the metric and is carried as a flag; the
//! stored diff itself is never sign-flipped.

use crate::{
    amortization::ReturnIndicators,
    scenario::ScenarioResult,
    types::{CostCategory, LaborOperation, Percent},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Cycles,
    UnitsPerCycle,
    ProducedPerYear,
    Commercialized,
    Revenue,
    Cost(CostCategory),
    LaborCost(LaborOperation),
    TotalCosts,
    GrossMargin,
    GrossInvestment,
    Subsidy,
    NetInvestment,
    Depreciation,
    NetResult,
    UnitCost,
    UnitMargin,
    GrossMarginRate,
    NetProfitabilityRate,
    AnnualLaborHours,
}

impl Metric {
    /// Comparison rows in display order.
    pub fn all() -> Vec<Metric> {
        let mut metrics = vec![
            Metric::Cycles,
            Metric::UnitsPerCycle,
            Metric::ProducedPerYear,
            Metric::Commercialized,
            Metric::Revenue,
        ];
        metrics.extend(CostCategory::ALL.iter().map(|c| Metric::Cost(*c)));
        metrics.extend(LaborOperation::ALL.iter().map(|op| Metric::LaborCost(*op)));
        metrics.extend([
            Metric::TotalCosts,
            Metric::GrossMargin,
            Metric::GrossInvestment,
            Metric::Subsidy,
            Metric::NetInvestment,
            Metric::Depreciation,
            Metric::NetResult,
            Metric::UnitCost,
            Metric::UnitMargin,
            Metric::GrossMarginRate,
            Metric::NetProfitabilityRate,
            Metric::AnnualLaborHours,
        ]);
        metrics
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Cycles          => "Cycles / year",
            Metric::UnitsPerCycle   => "Production / cycle",
            Metric::ProducedPerYear => "Production / year",
            Metric::Commercialized  => "Sold / year",
            Metric::Revenue         => "Revenue",
            Metric::Cost(c) => match c {
                CostCategory::Plants        => "Plants / seed",
                CostCategory::Fertilizer    => "Fertilizer",
                CostCategory::Water         => "Irrigation water",
                CostCategory::Phytosanitary => "Phytosanitary",
                CostCategory::Electricity   => "Electricity",
                CostCategory::Labor         => "Labor",
                CostCategory::Maintenance   => "Equipment maintenance",
            },
            Metric::LaborCost(op) => match op {
                LaborOperation::SoilPrep    => "Labor: soil preparation",
                LaborOperation::Planting    => "Labor: sowing / planting",
                LaborOperation::Weeding     => "Labor: weeding",
                LaborOperation::Harvest     => "Labor: harvest",
                LaborOperation::Maintenance => "Labor: irrigation maintenance",
            },
            Metric::TotalCosts           => "Total operating costs",
            Metric::GrossMargin          => "Gross margin",
            Metric::GrossInvestment      => "Gross investment",
            Metric::Subsidy              => "Subsidy",
            Metric::NetInvestment        => "Net investment",
            Metric::Depreciation         => "Depreciation",
            Metric::NetResult            => "Net result",
            Metric::UnitCost             => "Unit cost",
            Metric::UnitMargin           => "Unit margin",
            Metric::GrossMarginRate      => "Gross margin rate (%)",
            Metric::NetProfitabilityRate => "Net profitability (%)",
            Metric::AnnualLaborHours     => "Labor hours / year",
        }
    }

    /// Costs, investment and labor time are better when lower. A
    /// subsidy reduces the investment, so more of it is better.
    pub fn lower_is_better(self) -> bool {
        matches!(
            self,
            Metric::Cost(_)
                | Metric::LaborCost(_)
                | Metric::TotalCosts
                | Metric::GrossInvestment
                | Metric::NetInvestment
                | Metric::Depreciation
                | Metric::UnitCost
                | Metric::AnnualLaborHours
        )
    }

    /// Whether the figure is an amount of money.
    pub fn is_currency(self) -> bool {
        !matches!(
            self,
            Metric::Cycles
                | Metric::UnitsPerCycle
                | Metric::ProducedPerYear
                | Metric::Commercialized
                | Metric::GrossMarginRate
                | Metric::NetProfitabilityRate
                | Metric::AnnualLaborHours
        )
    }

    pub fn value(self, s: &ScenarioResult) -> f64 {
        match self {
            Metric::Cycles               => s.cycles,
            Metric::UnitsPerCycle        => s.units_per_cycle,
            Metric::ProducedPerYear      => s.produced_per_year,
            Metric::Commercialized       => s.commercialized,
            Metric::Revenue              => s.revenue,
            Metric::Cost(c)              => s.cost(c),
            Metric::LaborCost(op)        => s.labor_cost(op),
            Metric::TotalCosts           => s.total_costs,
            Metric::GrossMargin          => s.gross_margin,
            Metric::GrossInvestment      => s.gross_investment,
            Metric::Subsidy              => s.subsidy,
            Metric::NetInvestment        => s.net_investment,
            Metric::Depreciation         => s.depreciation,
            Metric::NetResult            => s.net_result,
            Metric::UnitCost             => s.unit_cost,
            Metric::UnitMargin           => s.unit_margin,
            Metric::GrossMarginRate      => s.gross_margin_rate,
            Metric::NetProfitabilityRate => s.net_profitability_rate,
            Metric::AnnualLaborHours     => s.annual_labor_hours,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDiff {
    pub metric:          Metric,
    pub pt:              f64,
    pub hy:              f64,
    /// Always `hy - pt`.
    pub diff:            f64,
    pub lower_is_better: bool,
}

impl MetricDiff {
    pub fn new(metric: Metric, pt: &ScenarioResult, hy: &ScenarioResult) -> Self {
        let (pt, hy) = (metric.value(pt), metric.value(hy));
        Self {
            metric,
            pt,
            hy,
            diff: hy - pt,
            lower_is_better: metric.lower_is_better(),
        }
    }

    /// `Some(true)` when the hydroponic figure is the better one,
    /// `Some(false)` when it is worse, `None` on a tie.
    pub fn favorable(&self) -> Option<bool> {
        if self.diff == 0.0 || self.diff.is_nan() {
            return None;
        }
        Some((self.diff < 0.0) == self.lower_is_better)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeResult {
    pub open_field: ScenarioResult,
    pub hydroponic: ScenarioResult,
    pub diffs: Vec<MetricDiff>,
    /// Hydroponic sold volume over open-field sold volume.
    pub production_multiplier: f64,
    pub labor_reduction_pct: Percent,
    /// Return indicators of the hydroponic investment.
    pub returns: ReturnIndicators,
}

impl ComparativeResult {
    pub fn new(open_field: ScenarioResult, hydroponic: ScenarioResult, returns: ReturnIndicators) -> Self {
        let diffs = Metric::all()
            .into_iter()
            .map(|m| MetricDiff::new(m, &open_field, &hydroponic))
            .collect();

        let production_multiplier = if open_field.commercialized > 0.0 {
            hydroponic.commercialized / open_field.commercialized
        } else {
            0.0
        };

        let labor_reduction_pct = if open_field.annual_labor_hours > 0.0 {
            (1.0 - hydroponic.annual_labor_hours / open_field.annual_labor_hours) * 100.0
        } else {
            0.0
        };

        Self {
            open_field,
            hydroponic,
            diffs,
            production_multiplier,
            labor_reduction_pct,
            returns,
        }
    }

    pub fn diff(&self, metric: Metric) -> Option<&MetricDiff> {
        self.diffs.iter().find(|d| d.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_metric_is_listed_once() {
        let all = Metric::all();
        for (i, m) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(m), "{m:?} listed twice");
        }
        assert_eq!(all.len(), 5 + CostCategory::ALL.len() + LaborOperation::ALL.len() + 12);
    }

    #[test]
    fn favorability_follows_direction() {
        let cheaper = MetricDiff {
            metric: Metric::TotalCosts,
            pt: 10.0,
            hy: 4.0,
            diff: -6.0,
            lower_is_better: true,
        };
        assert_eq!(cheaper.favorable(), Some(true));

        let poorer = MetricDiff {
            metric: Metric::Revenue,
            pt: 10.0,
            hy: 4.0,
            diff: -6.0,
            lower_is_better: false,
        };
        assert_eq!(poorer.favorable(), Some(false));

        let tie = MetricDiff { diff: 0.0, ..poorer };
        assert_eq!(tie.favorable(), None);
    }
}
