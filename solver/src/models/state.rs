use qtty::{Kilograms, Parsecs};
use serde::{Deserialize, Serialize};

use crate::constants::SOLAR_MASS_KG;
use crate::services::convergence::percentage_difference_too_big;

/// Iteration state of the mass–magnitude–distance solver.
///
/// Distance, both absolute magnitudes and both masses depend on each other
/// circularly; each solver step replaces the whole state at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolutionState {
    pub distance: Parsecs,
    pub abs_magnitude_1: f64,
    pub abs_magnitude_2: f64,
    pub mass_1: Kilograms,
    pub mass_2: Kilograms,
}

impl SolutionState {
    /// Starting point: unknown distance and magnitudes, one solar mass per star.
    pub fn initial() -> Self {
        Self {
            distance: Parsecs::new(0.0),
            abs_magnitude_1: 0.0,
            abs_magnitude_2: 0.0,
            mass_1: Kilograms::new(SOLAR_MASS_KG),
            mass_2: Kilograms::new(SOLAR_MASS_KG),
        }
    }

    /// Combined mass of both components.
    pub fn total_mass(&self) -> Kilograms {
        self.mass_1 + self.mass_2
    }

    /// Tracked values in a fixed order: distance, magnitudes, masses.
    pub fn tracked_values(&self) -> [f64; 5] {
        [
            self.distance.value(),
            self.abs_magnitude_1,
            self.abs_magnitude_2,
            self.mass_1.value(),
            self.mass_2.value(),
        ]
    }

    /// True if any tracked value of `next` differs from `self` by at least
    /// `tolerance_percent` percent of the value in `self`.
    pub fn changed_significantly(&self, next: &SolutionState, tolerance_percent: f64) -> bool {
        self.tracked_values()
            .iter()
            .zip(next.tracked_values().iter())
            .any(|(old, new)| percentage_difference_too_big(*old, *new, tolerance_percent))
    }
}

impl Default for SolutionState {
    fn default() -> Self {
        Self::initial()
    }
}
