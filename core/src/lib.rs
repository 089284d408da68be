//! Comparative ROI engine for open-field versus hydroponic-tower
//! cultivation.

pub mod amortization;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod scenario;
pub mod types;

pub use config::{CostMode, ParameterSet};
pub use engine::{simulate, Simulation, Workbench};
pub use error::{RoiError, RoiResult};
