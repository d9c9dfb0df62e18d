//! Fixed-step trajectory generation for the double pendulum.
//!
//! A run takes a [`TimeSpan`], [`InitialConditions`] in degrees and a set of
//! [`PhysicalParameters`], validates all of them, and then emits exactly
//! `n_steps + 1` samples. Sample `k` is taken at `t_min + k * h` with
//! `h = (t_max - t_min) / (n_steps - 1)`, so the final sample lies one step past
//! `t_max`.

use super::rk4::{Rk4Scheme, RK4};
use crate::errors::Result;
use crate::models::{InitialConditions, PhysicalParameters, TimeSpan, Trajectory, TrajectorySample};
use crate::physics::dynamics::DoublePendulumDynamics;
use tracing::{debug, warn};

/// Receives samples in order as a run produces them.
pub trait SampleSink {
    fn record(&mut self, sample: TrajectorySample);
}

impl<F: FnMut(TrajectorySample)> SampleSink for F {
    fn record(&mut self, sample: TrajectorySample) {
        self(sample)
    }
}

/// Runs the classical scheme and collects the whole trajectory.
pub fn integrate(
    span: &TimeSpan,
    initial: &InitialConditions,
    params: &PhysicalParameters,
) -> Result<Trajectory> {
    integrate_collect(span, initial, params, Rk4Scheme::Classic)
}

pub fn integrate_collect(
    span: &TimeSpan,
    initial: &InitialConditions,
    params: &PhysicalParameters,
    scheme: Rk4Scheme,
) -> Result<Trajectory> {
    let mut samples = Vec::with_capacity(span.n_steps as usize + 1);
    integrate_with_scheme(span, initial, params, scheme, |sample: TrajectorySample| samples.push(sample))?;
    Ok(Trajectory::from_samples(samples))
}

/// Streams the classical-scheme samples to `sink` without storing them.
pub fn integrate_with_sink<S: SampleSink>(
    span: &TimeSpan,
    initial: &InitialConditions,
    params: &PhysicalParameters,
    sink: S,
) -> Result<()> {
    integrate_with_scheme(span, initial, params, Rk4Scheme::Classic, sink)
}

/// Validates every input, then streams `n_steps + 1` samples to `sink`.
/// Nothing reaches the sink when validation fails.
pub fn integrate_with_scheme<S: SampleSink>(
    span: &TimeSpan,
    initial: &InitialConditions,
    params: &PhysicalParameters,
    scheme: Rk4Scheme,
    mut sink: S,
) -> Result<()> {
    span.validate()?;
    initial.validate()?;
    params.validate()?;

    let h = span.step_size();
    debug!(
        t_min = span.t_min,
        t_max = span.t_max,
        n_steps = span.n_steps,
        h,
        ?scheme,
        "starting double pendulum run"
    );

    let integrator = RK4::new(DoublePendulumDynamics::new(*params));
    let mut state = initial.to_state();
    sink.record(TrajectorySample::new(span.t_min, &state));

    for i in 1..=span.n_steps {
        state = integrator.integrate_with_scheme(&state, h, scheme);
        sink.record(TrajectorySample::new(span.time_at(i), &state));
    }

    if !state.is_finite() {
        warn!(?params, "run finished with a non-finite state, the motion passed through a singular configuration");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;
    use approx::assert_relative_eq;

    fn short_span() -> TimeSpan {
        TimeSpan::new(0.0, 1.0, 100)
    }

    #[test]
    fn test_sample_count_and_initial_sample() {
        let initial = InitialConditions::new(10.0, 0.0, -5.0, 0.0);
        let trajectory = integrate(&short_span(), &initial, &PhysicalParameters::default()).unwrap();

        assert_eq!(trajectory.len(), 101);
        let first = trajectory.first().unwrap();
        assert_eq!(first.t, 0.0);
        assert_relative_eq!(first.theta1, 10.0 * std::f64::consts::PI / 180.0, epsilon = 1e-15);
        assert_eq!(first.omega1, 0.0);
        assert_relative_eq!(first.theta2, -5.0 * std::f64::consts::PI / 180.0, epsilon = 1e-15);
        assert_eq!(first.omega2, 0.0);
    }

    #[test]
    fn test_times_evenly_spaced() {
        let span = short_span();
        let h = span.step_size();
        let trajectory = integrate(&span, &InitialConditions::default(), &PhysicalParameters::default()).unwrap();

        for pair in trajectory.samples().windows(2) {
            assert!(pair[1].t > pair[0].t);
            assert_relative_eq!(pair[1].t - pair[0].t, h, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_single_step_rejected_before_emitting() {
        let mut emitted = 0;
        let result = integrate_with_sink(
            &TimeSpan::new(0.0, 1.0, 1),
            &InitialConditions::default(),
            &PhysicalParameters::default(),
            |_: TrajectorySample| emitted += 1,
        );
        assert!(matches!(result, Err(SimulationError::InvalidStepCount(1))));
        assert_eq!(emitted, 0);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = PhysicalParameters::new(1.0, 1.0, 0.0, 1.0, 9.8);
        let result = integrate(&short_span(), &InitialConditions::default(), &params);
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter { name: "length2", .. })
        ));
    }

    #[test]
    fn test_sink_sees_same_samples_as_batch() {
        let span = short_span();
        let initial = InitialConditions::new(45.0, 10.0, 30.0, -20.0);
        let params = PhysicalParameters::new(0.8, 0.6, 0.4, 0.3, 9.8);

        let mut streamed = Vec::new();
        integrate_with_sink(&span, &initial, &params, |s: TrajectorySample| streamed.push(s)).unwrap();

        let batch = integrate(&span, &initial, &params).unwrap();
        assert_eq!(batch.samples(), streamed.as_slice());
    }

    #[test]
    fn test_legacy_scheme_only_on_request() {
        let span = short_span();
        let initial = InitialConditions::new(10.0, 0.0, -5.0, 0.0);
        let params = PhysicalParameters::default();

        let classic = integrate_collect(&span, &initial, &params, Rk4Scheme::Classic).unwrap();
        let legacy = integrate_collect(&span, &initial, &params, Rk4Scheme::LegacyProduct).unwrap();

        assert_eq!(classic, integrate(&span, &initial, &params).unwrap());
        assert_eq!(legacy.len(), classic.len());
        assert_ne!(legacy.last(), classic.last());
    }

    #[test]
    fn test_non_finite_state_propagates_without_error() {
        // A huge initial velocity overflows the derivative within a few steps
        let trajectory = integrate_collect(
            &TimeSpan::new(0.0, 1.0, 10),
            &InitialConditions::new(10.0, 1e300, 0.0, 0.0),
            &PhysicalParameters::default(),
            Rk4Scheme::Classic,
        )
        .unwrap();

        assert_eq!(trajectory.len(), 11);
        assert!(trajectory.first().unwrap().state().is_finite());
        assert!(!trajectory.last().unwrap().state().is_finite());
    }
}
