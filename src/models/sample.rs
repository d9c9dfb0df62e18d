use super::state::State;
use serde::Serialize;

/// One visited point of a run: time plus the angular state at that time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub t: f64,
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

impl TrajectorySample {
    pub fn new(t: f64, state: &State) -> Self {
        Self {
            t,
            theta1: state.theta1(),
            omega1: state.omega1(),
            theta2: state.theta2(),
            omega2: state.omega2(),
        }
    }

    pub fn state(&self) -> State {
        State::new(self.theta1, self.omega1, self.theta2, self.omega2)
    }
}

/// The complete, ordered output of one integration run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub(crate) fn from_samples(samples: Vec<TrajectorySample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrajectorySample> {
        self.samples.get(index)
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    pub fn into_samples(self) -> Vec<TrajectorySample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
