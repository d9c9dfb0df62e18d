pub mod session;
pub mod simulation;

pub use session::{RandomizationConfig, SessionConfig};
pub use simulation::SimulationConfig;
