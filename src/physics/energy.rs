use crate::models::{PhysicalParameters, State, Trajectory};

/// Kinetic energy of both point masses.
pub fn calculate_kinetic_energy(state: &State, params: &PhysicalParameters) -> f64 {
    let (l1, l2) = (params.length1, params.length2);
    let (w1, w2) = (state.omega1(), state.omega2());

    0.5 * params.total_mass() * l1 * l1 * w1 * w1
        + 0.5 * params.mass2 * l2 * l2 * w2 * w2
        + params.mass2 * l1 * l2 * w1 * w2 * (state.theta1() - state.theta2()).cos()
}

/// Potential energy with the pivot as reference height, angles from the downward vertical.
pub fn calculate_potential_energy(state: &State, params: &PhysicalParameters) -> f64 {
    -params.total_mass() * params.gravity * params.length1 * state.theta1().cos()
        - params.mass2 * params.gravity * params.length2 * state.theta2().cos()
}

pub fn calculate_energy(state: &State, params: &PhysicalParameters) -> f64 {
    calculate_kinetic_energy(state, params) + calculate_potential_energy(state, params)
}

/// Largest `|E(t) - E(0)| / |E(0)|` over the run. Zero for an empty trajectory;
/// infinite or NaN when the initial energy is exactly zero.
pub fn max_relative_energy_drift(trajectory: &Trajectory, params: &PhysicalParameters) -> f64 {
    let Some(first) = trajectory.first() else {
        return 0.0;
    };
    let initial_energy = calculate_energy(&first.state(), params);

    trajectory
        .iter()
        .map(|sample| (calculate_energy(&sample.state(), params) - initial_energy).abs())
        .fold(0.0, f64::max)
        / initial_energy.abs()
}
