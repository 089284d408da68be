//! Parameter set — every user-editable input of the calculator.
//!
//! The set is a plain value. The engine only ever reads it; callers
//! own the "current parameters" and replace them wholesale or through
//! `with_override` / `apply_override`, which is also where raw text
//! coming from an input field is coerced to a number.

use crate::error::{RoiError, RoiResult};
use crate::types::{Hours, Money, Percent};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the plant, water and pump-electricity cost lines are obtained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    /// Derived from volumes and unit prices (plants × unit price,
    /// water column × surface, pump duty cycle).
    #[default]
    Derived,
    /// Flat per-cycle amounts entered directly.
    Direct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterSet {
    // ── Global ─────────────────────────────────────────────────────
    /// Cultivated surface [m²].
    pub surface_m2: f64,
    pub amortization_years: f64,
    pub weeks_per_year: f64,
    pub discount_rate_pct: Percent,
    pub labor_cost_per_hour: Money,
    pub electricity_price_per_kwh: Money,
    pub plant_unit_price: Money,
    pub water_price_per_m3: Money,
    /// Irrigation water column per cycle [mm].
    pub water_column_mm: f64,
    /// Investment subsidy, granted to the hydroponic installation only.
    pub subsidy_rate_pct: Percent,
    pub cost_mode: CostMode,

    // ── Open field (PT) ────────────────────────────────────────────
    /// Plants per m².
    pub pt_density: f64,
    pub pt_cycle_weeks: f64,
    pub pt_sell_through_pct: Percent,
    pub pt_unit_price: Money,
    pub pt_investment: Money,
    pub pt_fertilizer_per_cycle: Money,
    pub pt_phyto_per_cycle: Money,
    pub pt_electricity_per_cycle: Money,
    pub pt_plant_cost_per_cycle: Money,
    pub pt_water_cost_per_cycle: Money,
    pub pt_labor_soil_prep: Hours,
    pub pt_labor_planting: Hours,
    pub pt_labor_weeding: Hours,
    pub pt_labor_harvest: Hours,
    pub pt_labor_maintenance: Hours,

    // ── Hydroponic towers (Hy) ─────────────────────────────────────
    pub hy_towers: f64,
    /// Plants per tower.
    pub hy_tower_capacity: f64,
    pub hy_cycle_weeks: f64,
    pub hy_sell_through_pct: Percent,
    pub hy_unit_price: Money,
    pub hy_price_per_tower: Money,
    pub hy_installation_cost: Money,
    pub hy_maintenance_per_year: Money,
    pub hy_fertilizer_per_tower: Money,
    pub hy_pump_watts: f64,
    pub hy_pump_hours_per_day: f64,
    pub hy_pump_days_per_cycle: f64,
    /// Fraction (0–1) of the open-field irrigation water saved.
    pub hy_water_saving_ratio: f64,
    pub hy_plant_cost_per_cycle: Money,
    pub hy_water_cost_per_cycle: Money,
    pub hy_electricity_cost_per_cycle: Money,
    pub hy_labor_planting: Hours,
    pub hy_labor_harvest: Hours,
    pub hy_labor_maintenance: Hours,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            surface_m2: 100.0,
            amortization_years: 5.0,
            weeks_per_year: 48.0,
            discount_rate_pct: 5.0,
            labor_cost_per_hour: 15.0,
            electricity_price_per_kwh: 0.18,
            plant_unit_price: 0.02,
            water_price_per_m3: 3.5,
            water_column_mm: 70.0,
            subsidy_rate_pct: 30.0,
            cost_mode: CostMode::Derived,

            pt_density: 14.0,
            pt_cycle_weeks: 8.0,
            pt_sell_through_pct: 70.0,
            pt_unit_price: 1.0,
            pt_investment: 2_000.0,
            pt_fertilizer_per_cycle: 40.0,
            pt_phyto_per_cycle: 15.0,
            pt_electricity_per_cycle: 5.0,
            pt_plant_cost_per_cycle: 30.0,
            pt_water_cost_per_cycle: 25.0,
            pt_labor_soil_prep: 6.0,
            pt_labor_planting: 8.0,
            pt_labor_weeding: 10.0,
            pt_labor_harvest: 12.0,
            pt_labor_maintenance: 2.0,

            hy_towers: 100.0,
            hy_tower_capacity: 40.0,
            hy_cycle_weeks: 4.5,
            hy_sell_through_pct: 95.0,
            hy_unit_price: 1.8,
            hy_price_per_tower: 600.0,
            hy_installation_cost: 5_000.0,
            hy_maintenance_per_year: 500.0,
            hy_fertilizer_per_tower: 5.0,
            hy_pump_watts: 500.0,
            hy_pump_hours_per_day: 24.0,
            hy_pump_days_per_cycle: 35.0,
            hy_water_saving_ratio: 0.8,
            hy_plant_cost_per_cycle: 80.0,
            hy_water_cost_per_cycle: 5.0,
            hy_electricity_cost_per_cycle: 75.6,
            hy_labor_planting: 5.0,
            hy_labor_harvest: 6.0,
            hy_labor_maintenance: 3.0,
        }
    }
}

impl ParameterSet {
    /// Load a JSON parameter document. Fields missing from the file keep
    /// their default value; unknown fields are rejected.
    pub fn load(path: impl AsRef<Path>) -> RoiResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let params: ParameterSet = serde_json::from_str(&content)?;
        Ok(params)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> RoiResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Every editable key, in sorted order.
    pub fn field_names() -> Vec<String> {
        match serde_json::to_value(ParameterSet::default()) {
            Ok(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Return a copy with one field replaced from raw input text.
    pub fn with_override(&self, key: &str, raw: &str) -> RoiResult<Self> {
        let mut doc = serde_json::to_value(self)?;
        let fields = doc
            .as_object_mut()
            .ok_or_else(|| anyhow::anyhow!("parameter set did not serialize to an object"))?;

        let slot = fields.get_mut(key).ok_or_else(|| RoiError::UnknownParameter {
            name: key.to_string(),
        })?;

        *slot = if slot.is_number() {
            serde_json::Value::from(coerce_number(key, raw))
        } else {
            serde_json::Value::String(raw.trim().to_string())
        };

        serde_json::from_value(doc).map_err(|e| RoiError::InvalidParameter {
            name: key.to_string(),
            reason: e.to_string(),
        })
    }

    /// In-place variant of [`with_override`](Self::with_override).
    /// On error the set is left untouched.
    pub fn apply_override(&mut self, key: &str, raw: &str) -> RoiResult<()> {
        *self = self.with_override(key, raw)?;
        Ok(())
    }

    /// Apply a list of `key=value` assignments in order.
    pub fn apply_assignments<'a, I>(&mut self, assignments: I) -> RoiResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut next = self.clone();
        for assignment in assignments {
            let (key, raw) = assignment.split_once('=').ok_or_else(|| {
                RoiError::InvalidParameter {
                    name: assignment.to_string(),
                    reason: "expected key=value".into(),
                }
            })?;
            next.apply_override(key.trim(), raw)?;
        }
        *self = next;
        Ok(())
    }
}

/// Input-field coercion: anything that is not a finite number becomes 0.
fn coerce_number(key: &str, raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::warn!("parameter {key}: could not parse {raw:?} as a number, using 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_override_parses_text() {
        let params = ParameterSet::default()
            .with_override("hy_towers", " 120 ")
            .unwrap();
        assert_eq!(params.hy_towers, 120.0);
    }

    #[test]
    fn garbage_is_coerced_to_zero() {
        let params = ParameterSet::default()
            .with_override("pt_density", "abc")
            .unwrap();
        assert_eq!(params.pt_density, 0.0);

        let params = ParameterSet::default()
            .with_override("pt_density", "NaN")
            .unwrap();
        assert_eq!(params.pt_density, 0.0, "non-finite input must not reach the engine");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = ParameterSet::default()
            .with_override("hy_colour", "12")
            .unwrap_err();
        assert!(matches!(err, RoiError::UnknownParameter { ref name } if name == "hy_colour"));
    }

    #[test]
    fn cost_mode_accepts_variant_names_only() {
        let params = ParameterSet::default()
            .with_override("cost_mode", "direct")
            .unwrap();
        assert_eq!(params.cost_mode, CostMode::Direct);

        let err = ParameterSet::default()
            .with_override("cost_mode", "guesswork")
            .unwrap_err();
        assert!(matches!(err, RoiError::InvalidParameter { .. }));
    }

    #[test]
    fn failed_assignment_list_leaves_set_unchanged() {
        let mut params = ParameterSet::default();
        let result = params.apply_assignments(["hy_towers=50", "no_such_field=1"]);
        assert!(result.is_err());
        assert_eq!(params, ParameterSet::default());
    }

    #[test]
    fn field_names_cover_both_methods() {
        let names = ParameterSet::field_names();
        assert!(names.iter().any(|n| n == "pt_density"));
        assert!(names.iter().any(|n| n == "hy_pump_watts"));
        assert!(names.iter().any(|n| n == "cost_mode"));
    }
}
