//! Mass–magnitude–distance fixed-point solver.
//!
//! The distance to a visual binary follows from Kepler's third law once the
//! total mass is known, but the masses come from luminosities, which come
//! from absolute magnitudes, which depend on the distance. The solver starts
//! from two solar-mass stars and feeds each estimate back in until none of
//! the tracked values moves by the configured tolerance.
//!
//! [`OrbitalSolver::step`] is a pure function of the current state; the
//! driver in [`OrbitalSolver::solve_with_observer`] bounds the number of
//! steps and reports progress through an [`IterationObserver`].

use log::{debug, warn};
use qtty::Years;

use super::{kepler, period, photometry};
use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::models::{Observation, Solution, SolutionState};

/// Outcome of one solver step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// State after the step. The solver always advances to it.
    pub state: SolutionState,
    /// No tracked value changed by the tolerance or more.
    pub converged: bool,
}

/// Receives the state after every solver step.
pub trait IterationObserver {
    /// Called once per step, `iteration` counting from 1.
    fn on_iteration(&mut self, iteration: usize, state: &SolutionState);

    /// Called once with the final solution.
    fn on_converged(&mut self, _solution: &Solution) {}
}

impl<F> IterationObserver for F
where
    F: FnMut(usize, &SolutionState),
{
    fn on_iteration(&mut self, iteration: usize, state: &SolutionState) {
        self(iteration, state)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {
    fn on_iteration(&mut self, _iteration: usize, _state: &SolutionState) {}
}

/// Solver for a single observed binary.
#[derive(Debug, Clone)]
pub struct OrbitalSolver {
    observation: Observation,
    config: SolverConfig,
    orbital_period: Years,
}

impl OrbitalSolver {
    /// Prepare a solver, computing the orbital period up front.
    ///
    /// # Errors
    /// * `Configuration` if `config` fails validation
    /// * `InvalidGeometry` / `Domain` from the period calculation
    pub fn new(observation: Observation, config: SolverConfig) -> SolverResult<Self> {
        config.validate()?;
        let orbital_period = period::orbital_period(
            observation.semi_major_rad(),
            observation.semi_minor_rad(),
            Years::new(config.observed_arc_years),
        )?;

        Ok(Self {
            observation,
            config,
            orbital_period,
        })
    }

    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn orbital_period(&self) -> Years {
        self.orbital_period
    }

    /// Compute the next state from `state`.
    ///
    /// The new distance comes from the total mass in `state`; magnitudes and
    /// masses are then derived from that new distance.
    pub fn step(&self, state: &SolutionState) -> SolverResult<Step> {
        let distance = kepler::system_distance(
            self.orbital_period,
            state.total_mass(),
            self.observation.semi_major_rad(),
        )?;

        let abs_magnitude_1 =
            photometry::absolute_magnitude(self.observation.relative_magnitude_1(), distance)?;
        let abs_magnitude_2 =
            photometry::absolute_magnitude(self.observation.relative_magnitude_2(), distance)?;

        let mass_1 = photometry::mass_from_luminosity(photometry::luminosity(abs_magnitude_1))?;
        let mass_2 = photometry::mass_from_luminosity(photometry::luminosity(abs_magnitude_2))?;

        let next = SolutionState {
            distance,
            abs_magnitude_1,
            abs_magnitude_2,
            mass_1,
            mass_2,
        };

        Ok(Step {
            converged: !state.changed_significantly(&next, self.config.tolerance_percent),
            state: next,
        })
    }

    /// Unbounded sequence of steps from the initial state.
    ///
    /// Ends after the first converged step or the first error.
    pub fn iterations(&self) -> Iterations<'_> {
        Iterations {
            solver: self,
            state: SolutionState::initial(),
            finished: false,
        }
    }

    /// Run to convergence without reporting progress.
    pub fn solve(&self) -> SolverResult<Solution> {
        self.solve_with_observer(&mut NoopObserver)
    }

    /// Run to convergence, notifying `observer` after every step.
    ///
    /// # Errors
    /// * `NonConvergence` if `max_iterations` steps pass without converging
    /// * `Domain` if an intermediate value leaves a function's domain
    pub fn solve_with_observer(
        &self,
        observer: &mut dyn IterationObserver,
    ) -> SolverResult<Solution> {
        let max_iterations = self.config.max_iterations;
        let mut last_state = SolutionState::initial();

        for (index, step) in self.iterations().take(max_iterations).enumerate() {
            let step = step?;
            let iteration = index + 1;

            debug!(
                "Iteration {}: distance {} pc, M1 {}, M2 {}, m1 {} kg, m2 {} kg",
                iteration,
                step.state.distance.value(),
                step.state.abs_magnitude_1,
                step.state.abs_magnitude_2,
                step.state.mass_1.value(),
                step.state.mass_2.value()
            );
            observer.on_iteration(iteration, &step.state);
            last_state = step.state;

            if step.converged {
                debug!("Converged after {} iterations", iteration);
                let solution = Solution::new(self.orbital_period, step.state, iteration);
                observer.on_converged(&solution);
                return Ok(solution);
            }
        }

        warn!(
            "No convergence within {} iterations (tolerance {}%)",
            max_iterations, self.config.tolerance_percent
        );
        Err(SolverError::NonConvergence {
            iterations: max_iterations,
            last_state,
        })
    }
}

/// Iterator over solver steps; see [`OrbitalSolver::iterations`].
#[derive(Debug)]
pub struct Iterations<'a> {
    solver: &'a OrbitalSolver,
    state: SolutionState,
    finished: bool,
}

impl Iterator for Iterations<'_> {
    type Item = SolverResult<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.solver.step(&self.state) {
            Ok(step) => {
                self.state = step.state;
                self.finished = step.converged;
                Some(Ok(step))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Solve `observation` with the default configuration.
pub fn solve(observation: &Observation) -> SolverResult<Solution> {
    OrbitalSolver::new(*observation, SolverConfig::default())?.solve()
}
