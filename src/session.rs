//! Trigger-driven pendulum playback.
//!
//! Each trigger draws a new random pendulum, integrates it once and stores the
//! Cartesian positions of every sample. Frames are then handed out one at a
//! time, in index order, until the run is exhausted or the next trigger
//! replaces it.

use crate::config::SessionConfig;
use crate::coordinates::{to_cartesian, CartesianPositions};
use crate::errors::Result;
use crate::integrators::integrate_with_scheme;
use crate::models::{InitialConditions, PhysicalParameters, TrajectorySample};
use rand::Rng;
use tracing::debug;

/// The values carried by the event that started the current run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    pub pitch: f64,
    pub velocity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub positions: CartesianPositions,
}

pub struct PendulumSession<R: Rng> {
    config: SessionConfig,
    rng: R,
    frames: Vec<CartesianPositions>,
    cursor: usize,
    last_trigger: Option<Trigger>,
    parameters: Option<PhysicalParameters>,
}

impl<R: Rng> PendulumSession<R> {
    pub fn new(config: SessionConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            frames: Vec::new(),
            cursor: 0,
            last_trigger: None,
            parameters: None,
        })
    }

    /// Draws a new pendulum, runs it and rewinds playback. Returns the frame count.
    pub fn trigger(&mut self, pitch: f64, velocity: f64) -> Result<usize> {
        let (parameters, initial) = self.draw();
        debug!(pitch, velocity, ?parameters, ?initial, "pendulum triggered");

        let mut frames = Vec::with_capacity(self.config.span.n_steps as usize + 1);
        integrate_with_scheme(
            &self.config.span,
            &initial,
            &parameters,
            self.config.scheme,
            |sample: TrajectorySample| frames.push(to_cartesian(&sample, &parameters)),
        )?;

        self.frames = frames;
        self.cursor = 0;
        self.last_trigger = Some(Trigger { pitch, velocity });
        self.parameters = Some(parameters);
        Ok(self.frames.len())
    }

    /// Next frame of the current run, `None` once every frame has been played.
    pub fn next_frame(&mut self) -> Option<Frame> {
        let positions = *self.frames.get(self.cursor)?;
        let frame = Frame {
            index: self.cursor,
            positions,
        };
        self.cursor += 1;
        Some(frame)
    }

    pub fn frame(&self, index: usize) -> Option<&CartesianPositions> {
        self.frames.get(index)
    }

    pub fn remaining(&self) -> usize {
        self.frames.len() - self.cursor
    }

    pub fn last_trigger(&self) -> Option<Trigger> {
        self.last_trigger
    }

    pub fn parameters(&self) -> Option<&PhysicalParameters> {
        self.parameters.as_ref()
    }

    fn draw(&mut self) -> (PhysicalParameters, InitialConditions) {
        let random = &self.config.randomization;
        let parameters = random.draw_parameters(&mut self.rng);
        let initial = random.draw_initial_conditions(&mut self.rng);
        (parameters, initial)
    }
}
