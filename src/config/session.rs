use crate::constants::*;
use crate::errors::{ensure_finite, ensure_positive, Result, SimulationError};
use crate::integrators::Rk4Scheme;
use crate::models::{InitialConditions, PhysicalParameters, TimeSpan};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How a trigger draws a fresh pendulum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomizationConfig {
    pub length_range: Range<f64>, // meters
    pub mass_range: Range<f64>,   // kilograms
    pub gravity: f64,
    pub base_angle: f64,   // degrees
    pub angle_jitter: f64, // degrees, initial angle is base_angle + U[0, angle_jitter)
}

impl RandomizationConfig {
    pub fn validate(&self) -> Result<()> {
        validate_range("length_range", &self.length_range)?;
        validate_range("mass_range", &self.mass_range)?;
        ensure_positive("gravity", self.gravity)?;
        ensure_finite("base_angle", self.base_angle)?;
        ensure_positive("angle_jitter", self.angle_jitter)
    }

    /// Lengths from `length_range`, masses from `mass_range`, fixed gravity.
    pub fn draw_parameters<R: Rng>(&self, rng: &mut R) -> PhysicalParameters {
        PhysicalParameters::new(
            rng.gen_range(self.length_range.clone()),
            rng.gen_range(self.mass_range.clone()),
            rng.gen_range(self.length_range.clone()),
            rng.gen_range(self.mass_range.clone()),
            self.gravity,
        )
    }

    /// Both links at rest near `base_angle`.
    pub fn draw_initial_conditions<R: Rng>(&self, rng: &mut R) -> InitialConditions {
        InitialConditions::new(
            self.base_angle + rng.gen_range(0.0..self.angle_jitter),
            0.0,
            self.base_angle + rng.gen_range(0.0..self.angle_jitter),
            0.0,
        )
    }
}

impl Default for RandomizationConfig {
    fn default() -> Self {
        Self {
            length_range: RANDOM_LOWER_BOUND..RANDOM_UPPER_BOUND,
            mass_range: RANDOM_LOWER_BOUND..RANDOM_UPPER_BOUND,
            gravity: GRAVITY,
            base_angle: TRIGGER_BASE_ANGLE_DEG,
            angle_jitter: TRIGGER_ANGLE_JITTER_DEG,
        }
    }
}

// Sampled values must stay strictly positive, so the lower bound must be too.
fn validate_range(name: &'static str, range: &Range<f64>) -> Result<()> {
    ensure_positive(name, range.start)?;
    ensure_positive(name, range.end)?;
    if range.end <= range.start {
        return Err(SimulationError::InvalidParameter {
            name,
            value: range.end,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub span: TimeSpan,
    pub scheme: Rk4Scheme,
    pub randomization: RandomizationConfig,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        self.span.validate()?;
        self.randomization.validate()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            span: TimeSpan::default(),
            scheme: Rk4Scheme::Classic,
            randomization: RandomizationConfig::default(),
        }
    }
}
