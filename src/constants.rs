pub const GRAVITY: f64 = 9.8; // Acceleration due to gravity (m/s²)

// Unit pendulum used when no parameters are supplied
pub const DEFAULT_LENGTH: f64 = 1.0; // meters
pub const DEFAULT_MASS: f64 = 1.0; // kilograms

// Default run: `solve_dpend 0.0 10.0 90.0 0.00 -10.0 0.0 1000`
pub const DEFAULT_T_MIN: f64 = 0.0; // seconds
pub const DEFAULT_T_MAX: f64 = 10.0; // seconds
pub const DEFAULT_N_STEPS: u32 = 1000;
pub const DEFAULT_THETA1_DEG: f64 = 90.0;
pub const DEFAULT_THETA2_DEG: f64 = -10.0;

// Trigger session randomization
pub const TRIGGER_BASE_ANGLE_DEG: f64 = -90.0;
pub const TRIGGER_ANGLE_JITTER_DEG: f64 = 5.0;
pub const RANDOM_LOWER_BOUND: f64 = 0.05; // Keeps random lengths/masses away from the singular limit
pub const RANDOM_UPPER_BOUND: f64 = 1.0;

// Number of components in the state vector
pub const N_EQUATIONS: usize = 4;
