//! Per-method configuration tables.
//!
//! Both cultivation methods run through the same scenario calculator.
//! What differs between them (which cost lines apply, how they are
//! derived, which labor operations exist, how the investment is built)
//! is captured here, once, as data.

use crate::{
    config::{CostMode, ParameterSet},
    types::{CostCategory, Hours, LaborOperation, Method, Money, Percent},
};
use serde::{Deserialize, Serialize};

/// A cost line that recurs every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleCost {
    pub category: CostCategory,
    pub per_cycle: Money,
}

/// A cost line charged once per year regardless of cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualCost {
    pub category: CostCategory,
    pub per_year: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborTask {
    pub operation: LaborOperation,
    pub hours_per_cycle: Hours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodProfile {
    pub method: Method,
    pub cycle_length_weeks: f64,
    pub units_per_cycle: f64,
    pub sell_through_pct: Percent,
    pub unit_price: Money,
    pub cycle_costs: Vec<CycleCost>,
    pub labor: Vec<LaborTask>,
    pub annual_costs: Vec<AnnualCost>,
    pub gross_investment: Money,
    pub subsidy_rate_pct: Percent,
}

/// Inputs shared by both methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTerms {
    pub weeks_per_year: f64,
    pub labor_cost_per_hour: Money,
    pub amortization_years: f64,
}

impl GlobalTerms {
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            weeks_per_year: params.weeks_per_year,
            labor_cost_per_hour: params.labor_cost_per_hour,
            amortization_years: params.amortization_years,
        }
    }
}

/// Open-field irrigation cost of one cycle: water column over the
/// surface, in m³, at the water price.
pub fn irrigation_cost_per_cycle(params: &ParameterSet) -> Money {
    let volume_m3 = params.surface_m2 * params.water_column_mm / 1000.0;
    volume_m3 * params.water_price_per_m3
}

/// Pump energy of one hydroponic cycle at the electricity price.
pub fn pump_cost_per_cycle(params: &ParameterSet) -> Money {
    let kwh = params.hy_pump_watts * params.hy_pump_hours_per_day * params.hy_pump_days_per_cycle
        / 1000.0;
    kwh * params.electricity_price_per_kwh
}

impl MethodProfile {
    pub fn for_method(method: Method, params: &ParameterSet) -> Self {
        match method {
            Method::OpenField  => Self::open_field(params),
            Method::Hydroponic => Self::hydroponic(params),
        }
    }

    pub fn open_field(params: &ParameterSet) -> Self {
        let units_per_cycle = params.pt_density * params.surface_m2;

        let (plants, water) = match params.cost_mode {
            CostMode::Derived => (
                units_per_cycle * params.plant_unit_price,
                irrigation_cost_per_cycle(params),
            ),
            CostMode::Direct => (params.pt_plant_cost_per_cycle, params.pt_water_cost_per_cycle),
        };

        Self {
            method: Method::OpenField,
            cycle_length_weeks: params.pt_cycle_weeks,
            units_per_cycle,
            sell_through_pct: params.pt_sell_through_pct,
            unit_price: params.pt_unit_price,
            cycle_costs: vec![
                CycleCost { category: CostCategory::Plants,        per_cycle: plants },
                CycleCost { category: CostCategory::Fertilizer,    per_cycle: params.pt_fertilizer_per_cycle },
                CycleCost { category: CostCategory::Water,         per_cycle: water },
                CycleCost { category: CostCategory::Phytosanitary, per_cycle: params.pt_phyto_per_cycle },
                CycleCost { category: CostCategory::Electricity,   per_cycle: params.pt_electricity_per_cycle },
            ],
            labor: vec![
                LaborTask { operation: LaborOperation::SoilPrep,    hours_per_cycle: params.pt_labor_soil_prep },
                LaborTask { operation: LaborOperation::Planting,    hours_per_cycle: params.pt_labor_planting },
                LaborTask { operation: LaborOperation::Weeding,     hours_per_cycle: params.pt_labor_weeding },
                LaborTask { operation: LaborOperation::Harvest,     hours_per_cycle: params.pt_labor_harvest },
                LaborTask { operation: LaborOperation::Maintenance, hours_per_cycle: params.pt_labor_maintenance },
            ],
            annual_costs: Vec::new(),
            gross_investment: params.pt_investment,
            subsidy_rate_pct: 0.0,
        }
    }

    pub fn hydroponic(params: &ParameterSet) -> Self {
        // Full utilization of every tower is assumed.
        let units_per_cycle = params.hy_towers * params.hy_tower_capacity;

        let (plants, water, electricity) = match params.cost_mode {
            CostMode::Derived => (
                units_per_cycle * params.plant_unit_price,
                irrigation_cost_per_cycle(params) * (1.0 - params.hy_water_saving_ratio),
                pump_cost_per_cycle(params),
            ),
            CostMode::Direct => (
                params.hy_plant_cost_per_cycle,
                params.hy_water_cost_per_cycle,
                params.hy_electricity_cost_per_cycle,
            ),
        };

        Self {
            method: Method::Hydroponic,
            cycle_length_weeks: params.hy_cycle_weeks,
            units_per_cycle,
            sell_through_pct: params.hy_sell_through_pct,
            unit_price: params.hy_unit_price,
            cycle_costs: vec![
                CycleCost { category: CostCategory::Plants,      per_cycle: plants },
                CycleCost {
                    category: CostCategory::Fertilizer,
                    per_cycle: params.hy_fertilizer_per_tower * params.hy_towers,
                },
                CycleCost { category: CostCategory::Water,       per_cycle: water },
                CycleCost { category: CostCategory::Electricity, per_cycle: electricity },
            ],
            labor: vec![
                LaborTask { operation: LaborOperation::Planting,    hours_per_cycle: params.hy_labor_planting },
                LaborTask { operation: LaborOperation::Harvest,     hours_per_cycle: params.hy_labor_harvest },
                LaborTask { operation: LaborOperation::Maintenance, hours_per_cycle: params.hy_labor_maintenance },
            ],
            annual_costs: vec![AnnualCost {
                category: CostCategory::Maintenance,
                per_year: params.hy_maintenance_per_year,
            }],
            gross_investment: params.hy_towers * params.hy_price_per_tower
                + params.hy_installation_cost,
            subsidy_rate_pct: params.subsidy_rate_pct,
        }
    }

    pub fn labor_hours_per_cycle(&self) -> Hours {
        self.labor.iter().map(|t| t.hours_per_cycle).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_field_has_no_subsidy_or_fixed_costs() {
        let profile = MethodProfile::open_field(&ParameterSet::default());
        assert_eq!(profile.subsidy_rate_pct, 0.0);
        assert!(profile.annual_costs.is_empty());
    }

    #[test]
    fn hydroponics_skips_soil_work() {
        let profile = MethodProfile::hydroponic(&ParameterSet::default());
        for op in [LaborOperation::SoilPrep, LaborOperation::Weeding] {
            assert!(
                profile.labor.iter().all(|t| t.operation != op),
                "{op:?} should not be a hydroponic task"
            );
        }
        assert!(profile
            .cycle_costs
            .iter()
            .all(|c| c.category != CostCategory::Phytosanitary));
    }

    #[test]
    fn derived_water_and_pump_costs() {
        let params = ParameterSet::default();
        // 100 m² × 70 mm = 7 m³ at 3.5 €/m³
        assert!((irrigation_cost_per_cycle(&params) - 24.5).abs() < 1e-9);
        // 500 W × 24 h × 35 d = 420 kWh at 0.18 €/kWh
        assert!((pump_cost_per_cycle(&params) - 75.6).abs() < 1e-9);
    }

    #[test]
    fn direct_mode_uses_flat_inputs() {
        let params = ParameterSet {
            cost_mode: CostMode::Direct,
            ..ParameterSet::default()
        };
        let hy = MethodProfile::hydroponic(&params);
        let water = hy
            .cycle_costs
            .iter()
            .find(|c| c.category == CostCategory::Water)
            .unwrap();
        assert_eq!(water.per_cycle, params.hy_water_cost_per_cycle);
    }
}
