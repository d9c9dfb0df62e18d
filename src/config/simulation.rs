//! Run configuration loaded from RON.
//!
//! Every section is optional and falls back to its default:
//!
//! ```ron
//! (
//!     span: (t_min: 0.0, t_max: 10.0, n_steps: 1000),
//!     initial: (theta1: 90.0, omega1: 0.0, theta2: -10.0, omega2: 0.0),
//!     parameters: (length1: 1.0, mass1: 1.0, length2: 1.0, mass2: 1.0, gravity: 9.8),
//!     scheme: classic, // or legacy_product
//! )
//! ```

use crate::errors::Result;
use crate::integrators::Rk4Scheme;
use crate::models::{InitialConditions, PhysicalParameters, TimeSpan};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub span: TimeSpan,
    pub initial: InitialConditions, // degrees, degrees per second
    pub parameters: PhysicalParameters,
    pub scheme: Rk4Scheme,
}

impl SimulationConfig {
    pub fn from_ron_str(source: &str) -> Result<Self> {
        Ok(ron::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    /// Validates the whole configuration before any integration starts.
    pub fn validate(&self) -> Result<()> {
        self.span.validate()?;
        self.initial.validate()?;
        self.parameters.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SimulationConfig::from_ron_str("()").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.span, TimeSpan::new(0.0, 10.0, 1000));
        assert_eq!(config.scheme, Rk4Scheme::Classic);
    }

    #[test]
    fn test_partial_config() {
        let config = SimulationConfig::from_ron_str(
            "(span: (t_max: 2.5, n_steps: 250), parameters: (mass2: 0.5), scheme: legacy_product)",
        )
        .unwrap();

        assert_eq!(config.span, TimeSpan::new(0.0, 2.5, 250));
        assert_eq!(config.parameters.mass2, 0.5);
        assert_eq!(config.parameters.length1, 1.0);
        assert_eq!(config.initial, InitialConditions::default());
        assert_eq!(config.scheme, Rk4Scheme::LegacyProduct);
    }

    #[test]
    fn test_malformed_config() {
        let result = SimulationConfig::from_ron_str("(span: (t_max: \"ten\"))");
        assert!(matches!(result, Err(SimulationError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SimulationConfig::from_file("/nonexistent/dpend.ron");
        assert!(matches!(result, Err(SimulationError::Io(_))));
    }

    #[test]
    fn test_validate_reports_step_count() {
        let config = SimulationConfig::from_ron_str("(span: (n_steps: 1))").unwrap();
        assert!(matches!(config.validate(), Err(SimulationError::InvalidStepCount(1))));
    }
}
