//! Error types for the orbital solver.

use thiserror::Error;

use crate::models::SolutionState;

/// Result type for solver operations
pub type SolverResult<T> = std::result::Result<T, SolverError>;

/// Errors that can occur while estimating a binary system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The projected ellipse cannot describe an orbit
    #[error("Invalid geometry (a = {semi_major}, b = {semi_minor}): {reason}")]
    InvalidGeometry {
        semi_major: f64,
        semi_minor: f64,
        reason: String,
    },

    /// The iteration cap was reached before every tracked value settled
    #[error("Solver did not converge after {iterations} iterations (last distance {:.4} pc)", .last_state.distance.value())]
    NonConvergence {
        iterations: usize,
        last_state: SolutionState,
    },

    /// A math function received an argument outside its domain
    #[error("Domain error in {operation}: argument {value}")]
    Domain { operation: &'static str, value: f64 },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SolverError {
    pub(crate) fn invalid_geometry(semi_major: f64, semi_minor: f64, reason: impl Into<String>) -> Self {
        SolverError::InvalidGeometry {
            semi_major,
            semi_minor,
            reason: reason.into(),
        }
    }

    pub(crate) fn domain(operation: &'static str, value: f64) -> Self {
        SolverError::Domain { operation, value }
    }

    /// Whether retrying with a looser tolerance or higher cap could succeed.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, SolverError::NonConvergence { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Kilograms, Parsecs};

    #[test]
    fn test_domain_error_message() {
        let err = SolverError::domain("log10", -2.0);
        assert_eq!(err.to_string(), "Domain error in log10: argument -2");
    }

    #[test]
    fn test_non_convergence_message_includes_distance() {
        let err = SolverError::NonConvergence {
            iterations: 7,
            last_state: SolutionState {
                distance: Parsecs::new(5.25),
                abs_magnitude_1: 1.0,
                abs_magnitude_2: 2.0,
                mass_1: Kilograms::new(1.0),
                mass_2: Kilograms::new(1.0),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("7 iterations"), "{msg}");
        assert!(msg.contains("5.2500 pc"), "{msg}");
        assert!(err.is_convergence_failure());
    }

    #[test]
    fn test_invalid_geometry_is_not_convergence_failure() {
        let err = SolverError::invalid_geometry(1.0, 2.0, "semi-minor axis exceeds semi-major axis");
        assert!(!err.is_convergence_failure());
        assert!(err.to_string().starts_with("Invalid geometry"));
    }
}
