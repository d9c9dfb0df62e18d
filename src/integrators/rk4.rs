use crate::models::State;
use crate::physics::dynamics::EquationsOfMotion;
use serde::{Deserialize, Serialize};

/// Second-stage update used by [`RK4::integrate_with_scheme`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rk4Scheme {
    /// Classical Runge-Kutta: the third stage is evaluated at `y + k2/2`.
    #[default]
    Classic,
    /// Output-compatible with the `solve_dpend.js` port of Wheatland's solver, whose
    /// third stage is evaluated at the component-wise product `y * k2/2`.
    /// Not a valid fourth-order scheme.
    LegacyProduct,
}

pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T>
where
    T::State: Clone + std::ops::Add<Output = T::State> + std::ops::Mul<f64, Output = T::State>,
{
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }

    /// One classical step: four derivative evaluations weighted 1:2:2:1.
    pub fn integrate(&self, state: &T::State, dt: f64) -> T::State {
        let k1 = self.eom.compute_derivative(state);

        let state2 = state.clone() + k1.clone() * (dt / 2.0);
        let k2 = self.eom.compute_derivative(&state2);

        let state3 = state.clone() + k2.clone() * (dt / 2.0);
        let k3 = self.eom.compute_derivative(&state3);

        let state4 = state.clone() + k3.clone() * dt;
        let k4 = self.eom.compute_derivative(&state4);

        state.clone() + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

impl<T: EquationsOfMotion<State = State>> RK4<T> {
    pub fn integrate_with_scheme(&self, state: &State, dt: f64, scheme: Rk4Scheme) -> State {
        match scheme {
            Rk4Scheme::Classic => self.integrate(state, dt),
            Rk4Scheme::LegacyProduct => self.integrate_legacy(state, dt),
        }
    }

    fn integrate_legacy(&self, state: &State, dt: f64) -> State {
        let k1 = self.eom.compute_derivative(state) * dt;

        let state2 = *state + k1 * 0.5;
        let k2 = self.eom.compute_derivative(&state2) * dt;

        let state3 = state.component_mul(&(k2 * 0.5));
        let k3 = self.eom.compute_derivative(&state3) * dt;

        let state4 = *state + k3;
        let k4 = self.eom.compute_derivative(&state4) * dt;

        *state + k1 * (1.0 / 6.0) + k2 * (1.0 / 3.0) + k3 * (1.0 / 3.0) + k4 * (1.0 / 6.0)
    }
}
