use qtty::{Kilograms, Parsecs, Years};
use serde::{Deserialize, Serialize};

use super::SolutionState;

/// Final estimate for a binary system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    orbital_period: Years,
    iterations: usize,
    #[serde(flatten)]
    state: SolutionState,
}

impl Solution {
    pub(crate) fn new(orbital_period: Years, state: SolutionState, iterations: usize) -> Self {
        Self {
            orbital_period,
            iterations,
            state,
        }
    }

    /// Orbital period in years.
    ///
    /// Years here are Julian years (365.25 d); `qtty::Years` only carries the
    /// value, it is never converted through the `qtty` year unit.
    pub fn orbital_period(&self) -> Years {
        self.orbital_period
    }

    pub fn distance(&self) -> Parsecs {
        self.state.distance
    }

    pub fn abs_magnitude_1(&self) -> f64 {
        self.state.abs_magnitude_1
    }

    pub fn abs_magnitude_2(&self) -> f64 {
        self.state.abs_magnitude_2
    }

    pub fn mass_1(&self) -> Kilograms {
        self.state.mass_1
    }

    pub fn mass_2(&self) -> Kilograms {
        self.state.mass_2
    }

    /// Number of solver steps taken, including the final converged one.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn state(&self) -> &SolutionState {
        &self.state
    }
}
