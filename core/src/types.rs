//! Shared primitive types used across the calculator.

use serde::{Deserialize, Serialize};

/// An amount in the parameter set's currency (EUR by default).
pub type Money = f64;

/// Labor time in hours.
pub type Hours = f64;

/// A rate expressed in percent (0–100), as entered by the user.
pub type Percent = f64;

/// The two cultivation methods under comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Open-field ("pleine terre") baseline.
    OpenField,
    /// Tower-based hydroponics, the capital-intensive alternative.
    Hydroponic,
}

impl Method {
    pub fn code(self) -> &'static str {
        match self {
            Method::OpenField  => "PT",
            Method::Hydroponic => "Hy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Method::OpenField  => "Open field",
            Method::Hydroponic => "Hydroponic towers",
        }
    }
}

/// Operating cost lines of a scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Plants,
    Fertilizer,
    Water,
    Phytosanitary,
    Electricity,
    Labor,
    Maintenance,
}

impl CostCategory {
    pub const ALL: [CostCategory; 7] = [
        CostCategory::Plants,
        CostCategory::Fertilizer,
        CostCategory::Water,
        CostCategory::Phytosanitary,
        CostCategory::Electricity,
        CostCategory::Labor,
        CostCategory::Maintenance,
    ];
}

/// Manual operations whose hours are costed at the labor rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LaborOperation {
    SoilPrep,
    Planting,
    Weeding,
    Harvest,
    Maintenance,
}

impl LaborOperation {
    pub const ALL: [LaborOperation; 5] = [
        LaborOperation::SoilPrep,
        LaborOperation::Planting,
        LaborOperation::Weeding,
        LaborOperation::Harvest,
        LaborOperation::Maintenance,
    ];
}
