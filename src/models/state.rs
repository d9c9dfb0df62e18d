use crate::constants::N_EQUATIONS;
use nalgebra as na;

/// Instantaneous configuration of the double pendulum.
/// Component order: [θ1, ω1, θ2, ω2], angles in radians, rates in rad/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub data: na::Vector4<f64>,
}

/// Time derivative of a [`State`], same layout.
pub type Derivative = State;

impl State {
    pub fn new(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        State {
            data: na::Vector4::new(theta1, omega1, theta2, omega2),
        }
    }

    pub fn zero() -> Self {
        State {
            data: na::Vector4::zeros(),
        }
    }

    pub fn theta1(&self) -> f64 {
        self.data[0]
    }

    pub fn omega1(&self) -> f64 {
        self.data[1]
    }

    pub fn theta2(&self) -> f64 {
        self.data[2]
    }

    pub fn omega2(&self) -> f64 {
        self.data[3]
    }

    pub fn to_array(&self) -> [f64; N_EQUATIONS] {
        [self.data[0], self.data[1], self.data[2], self.data[3]]
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Component-wise product, only used by the legacy RK4 scheme.
    pub fn component_mul(&self, other: &State) -> Self {
        State {
            data: self.data.component_mul(&other.data),
        }
    }
}

impl std::ops::Add for State {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        State {
            data: self.data + other.data,
        }
    }
}

impl std::ops::Mul<f64> for State {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        State {
            data: self.data * scalar,
        }
    }
}
