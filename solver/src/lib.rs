//! # Double Star
//!
//! Physical parameters of a visual binary star from its projected orbit.
//!
//! Given the angular semi-axes of the apparent orbit and the relative
//! magnitudes of both components, this crate estimates the orbital period,
//! the distance to the system, the absolute magnitude of each star and each
//! star's mass.
//!
//! ## Method
//!
//! - **Period**: Kepler's second law scales the time over which part of the
//!   orbit was observed by the ratio of the full ellipse to the swept segment.
//! - **Distance, magnitudes, masses**: Kepler's third law gives the true
//!   semi-major axis for an assumed total mass, and with it the distance; the
//!   distance modulus gives absolute magnitudes, Pogson's law luminosities and
//!   the mass–luminosity relation new masses. This is repeated until none of
//!   the five values changes by the configured tolerance.
//!
//! ## Architecture
//!
//! - [`models`]: Observation input, iteration state and final solution
//! - [`services`]: The physical relations and the fixed-point solver
//! - [`config`]: TOML / environment configuration of the solver
//! - [`report`]: Console and JSON rendering
//!
//! ```no_run
//! use double_star::{models::Observation, services::solve};
//!
//! let observation = Observation::from_arcseconds(4.5, 3.4, 3.9, 5.3)?;
//! let solution = solve(&observation)?;
//! println!("{:.2} pc", solution.distance().value());
//! # Ok::<(), double_star::SolverError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod report;
pub mod services;

pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use models::{Observation, Solution, SolutionState};
pub use services::{solve, IterationObserver, OrbitalSolver};
