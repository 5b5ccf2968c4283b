pub mod config;
pub mod conflict;
pub mod growth;
pub mod nation;
pub mod world;

pub use config::{ConfigError, NationConfig, SimulationParams};
pub use nation::Nation;
pub use world::{NationReport, NationStatus, World, WorldSummary};
