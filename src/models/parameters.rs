use crate::constants::{DEFAULT_LENGTH, DEFAULT_MASS, GRAVITY};
use crate::errors::{ensure_positive, Result};
use serde::{Deserialize, Serialize};

/// Physical description of one double pendulum, fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalParameters {
    pub length1: f64, // meters
    pub mass1: f64,   // kilograms
    pub length2: f64, // meters
    pub mass2: f64,   // kilograms
    pub gravity: f64, // m/s²
}

impl PhysicalParameters {
    pub fn new(length1: f64, mass1: f64, length2: f64, mass2: f64, gravity: f64) -> Self {
        Self {
            length1,
            mass1,
            length2,
            mass2,
            gravity,
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.mass1 + self.mass2
    }

    /// Checks that every field is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("length1", self.length1)?;
        ensure_positive("mass1", self.mass1)?;
        ensure_positive("length2", self.length2)?;
        ensure_positive("mass2", self.mass2)?;
        ensure_positive("gravity", self.gravity)
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_MASS, DEFAULT_LENGTH, DEFAULT_MASS, GRAVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;
    use test_case::test_case;

    #[test]
    fn test_default_is_unit_pendulum() {
        let params = PhysicalParameters::default();
        assert_eq!(params, PhysicalParameters::new(1.0, 1.0, 1.0, 1.0, 9.8));
        assert!(params.validate().is_ok());
    }

    #[test_case(PhysicalParameters::new(0.0, 1.0, 1.0, 1.0, 9.8), "length1"; "zero first length")]
    #[test_case(PhysicalParameters::new(1.0, -1.0, 1.0, 1.0, 9.8), "mass1"; "negative first mass")]
    #[test_case(PhysicalParameters::new(1.0, 1.0, -0.5, 1.0, 9.8), "length2"; "negative second length")]
    #[test_case(PhysicalParameters::new(1.0, 1.0, 1.0, 0.0, 9.8), "mass2"; "zero second mass")]
    #[test_case(PhysicalParameters::new(1.0, 1.0, 1.0, 1.0, f64::NAN), "gravity"; "nan gravity")]
    fn test_validate_rejects(params: PhysicalParameters, field: &str) {
        match params.validate() {
            Err(SimulationError::InvalidParameter { name, .. }) => assert_eq!(name, field),
            other => panic!("expected InvalidParameter for {field}, got {other:?}"),
        }
    }
}
