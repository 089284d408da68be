//! Scenario calculator — one costed production year for one method.
//!
//! The same steps run for both methods; the method profile decides
//! which cost lines and labor operations take part.

use crate::{
    profile::{GlobalTerms, MethodProfile},
    types::{CostCategory, Hours, LaborOperation, Method, Money, Percent},
};
use serde::{Deserialize, Serialize};

/// Annual operating costs, one field per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub plants:        Money,
    pub fertilizer:    Money,
    pub water:         Money,
    pub phytosanitary: Money,
    pub electricity:   Money,
    pub labor:         Money,
    pub maintenance:   Money,
}

impl CostBreakdown {
    pub fn get(&self, category: CostCategory) -> Money {
        match category {
            CostCategory::Plants        => self.plants,
            CostCategory::Fertilizer    => self.fertilizer,
            CostCategory::Water         => self.water,
            CostCategory::Phytosanitary => self.phytosanitary,
            CostCategory::Electricity   => self.electricity,
            CostCategory::Labor         => self.labor,
            CostCategory::Maintenance   => self.maintenance,
        }
    }

    fn add(&mut self, category: CostCategory, amount: Money) {
        let slot = match category {
            CostCategory::Plants        => &mut self.plants,
            CostCategory::Fertilizer    => &mut self.fertilizer,
            CostCategory::Water         => &mut self.water,
            CostCategory::Phytosanitary => &mut self.phytosanitary,
            CostCategory::Electricity   => &mut self.electricity,
            CostCategory::Labor         => &mut self.labor,
            CostCategory::Maintenance   => &mut self.maintenance,
        };
        *slot += amount;
    }

    pub fn total(&self) -> Money {
        CostCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Annual labor cost per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborBreakdown {
    pub soil_prep:   Money,
    pub planting:    Money,
    pub weeding:     Money,
    pub harvest:     Money,
    pub maintenance: Money,
}

impl LaborBreakdown {
    pub fn get(&self, operation: LaborOperation) -> Money {
        match operation {
            LaborOperation::SoilPrep    => self.soil_prep,
            LaborOperation::Planting    => self.planting,
            LaborOperation::Weeding     => self.weeding,
            LaborOperation::Harvest     => self.harvest,
            LaborOperation::Maintenance => self.maintenance,
        }
    }

    fn add(&mut self, operation: LaborOperation, amount: Money) {
        let slot = match operation {
            LaborOperation::SoilPrep    => &mut self.soil_prep,
            LaborOperation::Planting    => &mut self.planting,
            LaborOperation::Weeding     => &mut self.weeding,
            LaborOperation::Harvest     => &mut self.harvest,
            LaborOperation::Maintenance => &mut self.maintenance,
        };
        *slot += amount;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub method: Method,
    // Production
    pub cycles:            f64,
    pub units_per_cycle:   f64,
    pub produced_per_year: f64,
    pub commercialized:    f64,
    pub revenue:           Money,
    // Costs
    pub costs:                 CostBreakdown,
    pub labor_costs:           LaborBreakdown,
    pub labor_hours_per_cycle: Hours,
    pub annual_labor_hours:    Hours,
    pub total_costs:           Money,
    pub gross_margin:          Money,
    // Investment
    pub gross_investment: Money,
    pub subsidy:          Money,
    pub net_investment:   Money,
    pub depreciation:     Money,
    // Bottom line
    pub net_result:             Money,
    pub unit_cost:              Money,
    pub unit_margin:            Money,
    pub gross_margin_rate:      Percent,
    pub net_profitability_rate: Percent,
}

/// Number of complete cycles that fit in the operating year.
/// Cycle lengths below one week count as one week.
pub fn cycles_per_year(weeks_per_year: f64, cycle_length_weeks: f64) -> f64 {
    (weeks_per_year / cycle_length_weeks.max(1.0)).floor()
}

impl ScenarioResult {
    pub fn compute(profile: &MethodProfile, globals: &GlobalTerms) -> Self {
        let cycles = cycles_per_year(globals.weeks_per_year, profile.cycle_length_weeks);

        let units_per_cycle = profile.units_per_cycle;
        let produced_per_year = cycles * units_per_cycle;
        let commercialized = produced_per_year * profile.sell_through_pct / 100.0;
        let revenue = commercialized * profile.unit_price;

        let mut costs = CostBreakdown::default();
        for line in &profile.cycle_costs {
            costs.add(line.category, cycles * line.per_cycle);
        }

        let mut labor_costs = LaborBreakdown::default();
        for task in &profile.labor {
            let annual = cycles * task.hours_per_cycle * globals.labor_cost_per_hour;
            labor_costs.add(task.operation, annual);
            costs.add(CostCategory::Labor, annual);
        }
        let labor_hours_per_cycle = profile.labor_hours_per_cycle();
        let annual_labor_hours = cycles * labor_hours_per_cycle;

        for line in &profile.annual_costs {
            costs.add(line.category, line.per_year);
        }

        let total_costs = costs.total();
        let gross_margin = revenue - total_costs;

        let gross_investment = profile.gross_investment;
        let subsidy = gross_investment * profile.subsidy_rate_pct / 100.0;
        let net_investment = gross_investment - subsidy;
        let depreciation = if globals.amortization_years > 0.0 {
            net_investment / globals.amortization_years
        } else {
            0.0
        };

        let net_result = gross_margin - depreciation;

        let (unit_cost, unit_margin) = if commercialized > 0.0 {
            (
                (total_costs + depreciation) / commercialized,
                net_result / commercialized,
            )
        } else {
            (0.0, 0.0)
        };

        let (gross_margin_rate, net_profitability_rate) = if revenue > 0.0 {
            (gross_margin / revenue * 100.0, net_result / revenue * 100.0)
        } else {
            (0.0, 0.0)
        };

        Self {
            method: profile.method,
            cycles,
            units_per_cycle,
            produced_per_year,
            commercialized,
            revenue,
            costs,
            labor_costs,
            labor_hours_per_cycle,
            annual_labor_hours,
            total_costs,
            gross_margin,
            gross_investment,
            subsidy,
            net_investment,
            depreciation,
            net_result,
            unit_cost,
            unit_margin,
            gross_margin_rate,
            net_profitability_rate,
        }
    }

    pub fn cost(&self, category: CostCategory) -> Money {
        self.costs.get(category)
    }

    pub fn labor_cost(&self, operation: LaborOperation) -> Money {
        self.labor_costs.get(operation)
    }
}
