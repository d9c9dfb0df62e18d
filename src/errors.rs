use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("step count must be at least 2, got {0}")]
    InvalidStepCount(u32),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),
}

/// Rejects values that are not finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}
