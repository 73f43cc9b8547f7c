//! Drug level simulation for periodic dosing regimens
//!
//! Regimens (dose, period, delay, half-life) are simulated on a discretised time
//! window with first-order elimination, and summed per drug name into series
//! ready for an XY line chart.

pub mod config;
pub mod dosing;
pub mod error;
pub mod output;
pub mod simulation;

pub use dosing::Regimen;
pub use error::{DoseError, DoseResult};
pub use simulation::{simulate, DrugSeries, SeriesPoint, SimulationResult, TimeWindow};
