pub mod cartesian;

pub use cartesian::{angles_to_cartesian, state_to_cartesian, to_cartesian, CartesianPositions};
