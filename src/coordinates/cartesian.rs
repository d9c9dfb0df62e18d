use crate::models::{PhysicalParameters, State, TrajectorySample};
use serde::Serialize;

/// Joint (x1, y1) and bob (x2, y2) positions relative to the fixed pivot.
/// The x axis points along the downward vertical, matching θ = 0 at rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartesianPositions {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

pub fn angles_to_cartesian(theta1: f64, theta2: f64, params: &PhysicalParameters) -> CartesianPositions {
    let x1 = params.length1 * theta1.cos();
    let y1 = params.length1 * theta1.sin();
    let x2 = x1 + params.length2 * theta2.cos();
    let y2 = y1 + params.length2 * theta2.sin();

    CartesianPositions { x1, y1, x2, y2 }
}

pub fn to_cartesian(sample: &TrajectorySample, params: &PhysicalParameters) -> CartesianPositions {
    angles_to_cartesian(sample.theta1, sample.theta2, params)
}

pub fn state_to_cartesian(state: &State, params: &PhysicalParameters) -> CartesianPositions {
    angles_to_cartesian(state.theta1(), state.theta2(), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use test_case::test_case;

    fn assert_positions(result: CartesianPositions, expected: CartesianPositions) {
        assert_abs_diff_eq!(result.x1, expected.x1, epsilon = 1e-12);
        assert_abs_diff_eq!(result.y1, expected.y1, epsilon = 1e-12);
        assert_abs_diff_eq!(result.x2, expected.x2, epsilon = 1e-12);
        assert_abs_diff_eq!(result.y2, expected.y2, epsilon = 1e-12);
    }

    #[test_case(0.0, 0.0, CartesianPositions { x1: 2.0, y1: 0.0, x2: 3.5, y2: 0.0 }; "hanging straight down")]
    #[test_case(FRAC_PI_2, 0.0, CartesianPositions { x1: 0.0, y1: 2.0, x2: 1.5, y2: 2.0 }; "first link horizontal")]
    #[test_case(PI, -FRAC_PI_2, CartesianPositions { x1: -2.0, y1: 0.0, x2: -2.0, y2: -1.5 }; "first link inverted")]
    #[test_case(
        FRAC_PI_4,
        -FRAC_PI_4,
        CartesianPositions {
            x1: 2.0 * FRAC_PI_4.cos(),
            y1: 2.0 * FRAC_PI_4.sin(),
            x2: 2.0 * FRAC_PI_4.cos() + 1.5 * FRAC_PI_4.cos(),
            y2: 2.0 * FRAC_PI_4.sin() - 1.5 * FRAC_PI_4.sin(),
        };
        "links folded symmetrically"
    )]
    fn test_to_cartesian(theta1: f64, theta2: f64, expected: CartesianPositions) {
        let params = PhysicalParameters::new(2.0, 1.0, 1.5, 1.0, 9.8);
        let sample = TrajectorySample {
            t: 0.0,
            theta1,
            omega1: 0.3,
            theta2,
            omega2: -0.3,
        };
        assert_positions(to_cartesian(&sample, &params), expected);
        assert_positions(state_to_cartesian(&sample.state(), &params), expected);
    }

    #[test]
    fn test_link_lengths_preserved() {
        let params = PhysicalParameters::new(0.7, 1.0, 0.4, 1.0, 9.8);
        let p = angles_to_cartesian(1.234, -2.5, &params);
        assert_abs_diff_eq!(p.x1.hypot(p.y1), 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!((p.x2 - p.x1).hypot(p.y2 - p.y1), 0.4, epsilon = 1e-12);
    }
}
