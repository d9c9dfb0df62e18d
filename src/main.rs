use clap::{Parser, ValueEnum};
use dpend::config::{RandomizationConfig, SimulationConfig};
use dpend::integrators::{integrate_collect, Rk4Scheme};
use dpend::models::{InitialConditions, TimeSpan};
use dpend::output::{write_trajectory, OutputFormat};
use dpend::physics::energy::max_relative_energy_drift;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Text,
}

/// Integrates a double pendulum with fixed-step RK4.
///
/// Angles are given in degrees and angular velocities in degrees per second;
/// all output angles are in radians.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Start time (s)
    #[arg(allow_negative_numbers = true)]
    t_min: Option<f64>,
    /// End time (s)
    #[arg(allow_negative_numbers = true)]
    t_max: Option<f64>,
    /// Initial angle of the first link (deg)
    #[arg(allow_negative_numbers = true)]
    theta1: Option<f64>,
    /// Initial angular velocity of the first link (deg/s)
    #[arg(allow_negative_numbers = true)]
    omega1: Option<f64>,
    /// Initial angle of the second link (deg)
    #[arg(allow_negative_numbers = true)]
    theta2: Option<f64>,
    /// Initial angular velocity of the second link (deg/s)
    #[arg(allow_negative_numbers = true)]
    omega2: Option<f64>,
    /// Number of integration steps
    n_steps: Option<u32>,

    /// RON file with span, initial conditions, parameters and scheme
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    length1: Option<f64>,
    #[arg(long)]
    mass1: Option<f64>,
    #[arg(long)]
    length2: Option<f64>,
    #[arg(long)]
    mass2: Option<f64>,
    #[arg(long)]
    gravity: Option<f64>,
    /// Draw lengths and masses uniformly from [0.05, 1)
    #[arg(long)]
    randomize: bool,
    /// Seed for --randomize
    #[arg(long, requires = "randomize")]
    seed: Option<u64>,
    /// Reproduce the defective second RK4 stage of solve_dpend.js
    #[arg(long)]
    legacy_scheme: bool,
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,
    /// Append joint and bob positions to every sample
    #[arg(long)]
    cartesian: bool,
    /// Output file, stdout when absent
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Log level: -v info, -vv debug
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn simulation_config(&self) -> Result<SimulationConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_file(path)?,
            None => SimulationConfig::default(),
        };

        let TimeSpan { t_min, t_max, n_steps } = config.span;
        config.span = TimeSpan::new(
            self.t_min.unwrap_or(t_min),
            self.t_max.unwrap_or(t_max),
            self.n_steps.unwrap_or(n_steps),
        );

        let InitialConditions { theta1, omega1, theta2, omega2 } = config.initial;
        config.initial = InitialConditions::new(
            self.theta1.unwrap_or(theta1),
            self.omega1.unwrap_or(omega1),
            self.theta2.unwrap_or(theta2),
            self.omega2.unwrap_or(omega2),
        );

        if self.randomize {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let random = RandomizationConfig {
                gravity: config.parameters.gravity,
                ..Default::default()
            };
            config.parameters = random.draw_parameters(&mut rng);
        }

        let p = &mut config.parameters;
        p.length1 = self.length1.unwrap_or(p.length1);
        p.mass1 = self.mass1.unwrap_or(p.mass1);
        p.length2 = self.length2.unwrap_or(p.length2);
        p.mass2 = self.mass2.unwrap_or(p.mass2);
        p.gravity = self.gravity.unwrap_or(p.gravity);

        if self.legacy_scheme {
            config.scheme = Rk4Scheme::LegacyProduct;
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = args.simulation_config()?;
    info!(?config, "running simulation");

    let trajectory = integrate_collect(&config.span, &config.initial, &config.parameters, config.scheme)?;

    let energy_error = max_relative_energy_drift(&trajectory, &config.parameters);
    info!(samples = trajectory.len(), energy_error, "integration finished");

    let format = match args.format {
        Format::Csv => OutputFormat::Csv,
        Format::Text => OutputFormat::Text,
    };
    let params = args.cartesian.then_some(&config.parameters);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_trajectory(writer, &trajectory, format, params)?;

    if let Some(path) = &args.output {
        info!("trajectory written to {}", path.display());
    }
    Ok(())
}
