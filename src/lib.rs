//! Double pendulum trajectories from a fixed-step fourth-order Runge-Kutta solver.
//!
//! ```
//! use dpend::{integrate, InitialConditions, PhysicalParameters, TimeSpan};
//!
//! let trajectory = integrate(
//!     &TimeSpan::new(0.0, 10.0, 1000),
//!     &InitialConditions::new(90.0, 0.0, -10.0, 0.0),
//!     &PhysicalParameters::default(),
//! )?;
//! assert_eq!(trajectory.len(), 1001);
//! # Ok::<(), dpend::SimulationError>(())
//! ```

pub mod config;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod integrators;
pub mod models;
pub mod output;
pub mod physics;
pub mod session;

pub use coordinates::{to_cartesian, CartesianPositions};
pub use errors::{Result, SimulationError};
pub use integrators::{integrate, integrate_with_sink, Rk4Scheme, SampleSink};
pub use models::{InitialConditions, PhysicalParameters, State, TimeSpan, Trajectory, TrajectorySample};
pub use physics::dynamics::derivative;
