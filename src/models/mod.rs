pub mod parameters;
pub mod run;
pub mod sample;
pub mod state;

pub use parameters::PhysicalParameters;
pub use run::{InitialConditions, TimeSpan};
pub use sample::{Trajectory, TrajectorySample};
pub use state::{Derivative, State};
