//! Application service layer - config, shared facility, simulation

pub mod config;
pub mod shared;
pub mod simulation;

pub use config::{CapacityConfig, Config, PricingConfig};
pub use shared::SharedParking;
pub use simulation::{run_script, Outcome, Script, SimulationReport};
