use crate::models::{Derivative, PhysicalParameters, State};

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Self::State;
}

/// Closed-form double pendulum equations of motion.
///
/// Angles are measured from the downward vertical. Nothing is wrapped or guarded:
/// when `(m1 + m2) L1 - m2 L1 cos²(θ2 - θ1)` vanishes the result is NaN or infinite.
pub fn derivative(state: &State, params: &PhysicalParameters) -> Derivative {
    let PhysicalParameters {
        length1: l1,
        mass1: m1,
        length2: l2,
        mass2: m2,
        gravity: g,
    } = *params;

    let (theta1, omega1) = (state.theta1(), state.omega1());
    let (theta2, omega2) = (state.theta2(), state.omega2());

    let del = theta2 - theta1;
    let (sin_del, cos_del) = del.sin_cos();
    let total_mass = m1 + m2;

    let den1 = total_mass * l1 - m2 * l1 * cos_del * cos_del;
    let domega1 = (m2 * l1 * omega1 * omega1 * sin_del * cos_del
        + m2 * g * theta2.sin() * cos_del
        + m2 * l2 * omega2 * omega2 * sin_del
        - total_mass * g * theta1.sin())
        / den1;

    let den2 = (l2 / l1) * den1;
    let domega2 = (-m2 * l2 * omega2 * omega2 * sin_del * cos_del
        + total_mass * g * theta1.sin() * cos_del
        - total_mass * l1 * omega1 * omega1 * sin_del
        - total_mass * g * theta2.sin())
        / den2;

    State::new(omega1, domega1, omega2, domega2)
}

pub struct DoublePendulumDynamics {
    params: PhysicalParameters,
}

impl DoublePendulumDynamics {
    pub fn new(params: PhysicalParameters) -> Self {
        Self { params }
    }
}

impl EquationsOfMotion for DoublePendulumDynamics {
    type State = State;

    fn compute_derivative(&self, state: &State) -> State {
        derivative(state, &self.params)
    }
}
