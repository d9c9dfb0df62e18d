use super::state::State;
use crate::constants::*;
use crate::errors::{ensure_finite, Result, SimulationError};
use serde::{Deserialize, Serialize};

/// Integration interval and the number of fixed steps taken across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSpan {
    pub t_min: f64, // seconds
    pub t_max: f64, // seconds
    pub n_steps: u32,
}

impl TimeSpan {
    pub fn new(t_min: f64, t_max: f64, n_steps: u32) -> Self {
        Self {
            t_min,
            t_max,
            n_steps,
        }
    }

    /// Fixed step `(t_max - t_min) / (n_steps - 1)`. Undefined unless `validate` passes.
    pub fn step_size(&self) -> f64 {
        (self.t_max - self.t_min) / (f64::from(self.n_steps) - 1.0)
    }

    /// Time of the sample at `index`.
    pub fn time_at(&self, index: u32) -> f64 {
        self.t_min + self.step_size() * f64::from(index)
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_steps <= 1 {
            return Err(SimulationError::InvalidStepCount(self.n_steps));
        }
        ensure_finite("t_min", self.t_min)?;
        ensure_finite("t_max", self.t_max)?;
        if self.t_max <= self.t_min {
            return Err(SimulationError::InvalidParameter {
                name: "t_max",
                value: self.t_max,
            });
        }
        Ok(())
    }
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self::new(DEFAULT_T_MIN, DEFAULT_T_MAX, DEFAULT_N_STEPS)
    }
}

/// Initial angles (degrees) and angular velocities (degrees per second).
/// This is the only place where degrees enter the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

impl InitialConditions {
    pub fn new(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        Self {
            theta1,
            omega1,
            theta2,
            omega2,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("theta1", self.theta1)?;
        ensure_finite("omega1", self.omega1)?;
        ensure_finite("theta2", self.theta2)?;
        ensure_finite("omega2", self.omega2)
    }

    /// Converts to a radian state: θ = θ_deg * π/180, likewise ω.
    pub fn to_state(&self) -> State {
        State::new(
            self.theta1.to_radians(),
            self.omega1.to_radians(),
            self.theta2.to_radians(),
            self.omega2.to_radians(),
        )
    }
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self::new(DEFAULT_THETA1_DEG, 0.0, DEFAULT_THETA2_DEG, 0.0)
    }
}
