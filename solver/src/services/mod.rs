//! Numerical services behind the orbital solver.
//!
//! Each module covers one physical relation; [`solver`] ties them together
//! into the fixed-point iteration.

pub mod convergence;
pub mod kepler;
pub mod period;
pub mod photometry;
pub mod solver;


pub use solver::{solve, IterationObserver, Iterations, NoopObserver, OrbitalSolver, Step};
