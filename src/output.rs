use crate::coordinates::to_cartesian;
use crate::errors::Result;
use crate::models::{PhysicalParameters, Trajectory, TrajectorySample};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    /// Whitespace separated `t θ1 ω1 θ2 ω2` with six decimals, one sample per line.
    Text,
}

#[derive(Serialize)]
struct CartesianRecord {
    t: f64,
    theta1: f64,
    omega1: f64,
    theta2: f64,
    omega2: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CartesianRecord {
    fn new(sample: &TrajectorySample, params: &PhysicalParameters) -> Self {
        let p = to_cartesian(sample, params);
        Self {
            t: sample.t,
            theta1: sample.theta1,
            omega1: sample.omega1,
            theta2: sample.theta2,
            omega2: sample.omega2,
            x1: p.x1,
            y1: p.y1,
            x2: p.x2,
            y2: p.y2,
        }
    }
}

/// Writes one header row and one row per sample. Cartesian columns are appended
/// when `params` is given.
pub fn write_csv<W: Write>(
    writer: W,
    trajectory: &Trajectory,
    params: Option<&PhysicalParameters>,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    match params {
        Some(params) => {
            for sample in trajectory {
                writer.serialize(CartesianRecord::new(sample, params))?;
            }
        }
        None => {
            for sample in trajectory {
                writer.serialize(sample)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_text<W: Write>(
    mut writer: W,
    trajectory: &Trajectory,
    params: Option<&PhysicalParameters>,
) -> Result<()> {
    for sample in trajectory {
        write!(
            writer,
            "{:.6} {:.6} {:.6} {:.6} {:.6}",
            sample.t, sample.theta1, sample.omega1, sample.theta2, sample.omega2
        )?;
        if let Some(params) = params {
            let p = to_cartesian(sample, params);
            write!(writer, " {:.6} {:.6} {:.6} {:.6}", p.x1, p.y1, p.x2, p.y2)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_trajectory<W: Write>(
    writer: W,
    trajectory: &Trajectory,
    format: OutputFormat,
    params: Option<&PhysicalParameters>,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, trajectory, params),
        OutputFormat::Text => write_text(writer, trajectory, params),
    }
}
