//! Solver configuration file and environment support.
//!
//! Settings are read from a TOML file with a single `[solver]` table:
//!
//! ```toml
//! [solver]
//! observed_arc_years = 11.0
//! tolerance_percent = 1.0
//! max_iterations = 100
//! ```
//!
//! Every field is optional and falls back to the defaults in
//! [`crate::constants`].

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_OBSERVED_ARC_YEARS, DEFAULT_TOLERANCE_PERCENT};
use crate::error::{SolverError, SolverResult};

/// Environment variable overriding `max_iterations`.
pub const ENV_MAX_ITERATIONS: &str = "DOUBLE_STAR_MAX_ITERATIONS";
/// Environment variable overriding `tolerance_percent`.
pub const ENV_TOLERANCE: &str = "DOUBLE_STAR_TOLERANCE";
/// Environment variable overriding `observed_arc_years`.
pub const ENV_OBSERVED_ARC: &str = "DOUBLE_STAR_OBSERVED_ARC";

/// Configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Tunables of the orbital solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Time span over which the partial orbital arc was observed [yr].
    #[serde(default = "default_observed_arc_years")]
    pub observed_arc_years: f64,
    /// Relative change [%] below which a tracked value counts as settled.
    #[serde(default = "default_tolerance_percent")]
    pub tolerance_percent: f64,
    /// Iteration cap before the solver reports non-convergence.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_observed_arc_years() -> f64 {
    DEFAULT_OBSERVED_ARC_YEARS
}

fn default_tolerance_percent() -> f64 {
    DEFAULT_TOLERANCE_PERCENT
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            observed_arc_years: DEFAULT_OBSERVED_ARC_YEARS,
            tolerance_percent: DEFAULT_TOLERANCE_PERCENT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Load solver configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(SolverConfig)` if the file was read, parsed and validated
    /// * `Err(SolverError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> SolverResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SolverError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> SolverResult<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| {
            SolverError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        file.solver.validate()?;
        Ok(file.solver)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `double-star.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(config))` if a file was found and parsed
    /// * `Ok(None)` if no file exists in any of the locations
    /// * `Err` if a file exists but cannot be read or parsed
    pub fn from_default_location() -> SolverResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("double-star.toml"),
            PathBuf::from("config/double-star.toml"),
            PathBuf::from("../double-star.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading solver configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Apply overrides from environment variables.
    ///
    /// # Environment Variables
    /// - `DOUBLE_STAR_MAX_ITERATIONS` (optional): iteration cap
    /// - `DOUBLE_STAR_TOLERANCE` (optional): convergence tolerance in percent
    /// - `DOUBLE_STAR_OBSERVED_ARC` (optional): observed arc in years
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed, or the
    /// resulting configuration is invalid.
    pub fn with_env_overrides(mut self) -> SolverResult<Self> {
        if let Ok(value) = env::var(ENV_MAX_ITERATIONS) {
            self.max_iterations = value.trim().parse().map_err(|_| {
                SolverError::Configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_MAX_ITERATIONS, value
                ))
            })?;
        }
        if let Ok(value) = env::var(ENV_TOLERANCE) {
            self.tolerance_percent = parse_env_f64(ENV_TOLERANCE, &value)?;
        }
        if let Ok(value) = env::var(ENV_OBSERVED_ARC) {
            self.observed_arc_years = parse_env_f64(ENV_OBSERVED_ARC, &value)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Defaults, then the default-location file if present, then environment overrides.
    pub fn load() -> SolverResult<Self> {
        Self::from_default_location()?
            .unwrap_or_default()
            .with_env_overrides()
    }

    /// Reject settings the solver cannot run with.
    pub fn validate(&self) -> SolverResult<()> {
        if !(self.observed_arc_years > 0.0 && self.observed_arc_years.is_finite()) {
            return Err(SolverError::Configuration(format!(
                "observed_arc_years must be positive, got {}",
                self.observed_arc_years
            )));
        }
        if !(self.tolerance_percent > 0.0 && self.tolerance_percent.is_finite()) {
            return Err(SolverError::Configuration(format!(
                "tolerance_percent must be positive, got {}",
                self.tolerance_percent
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::Configuration(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_env_f64(name: &str, value: &str) -> SolverResult<f64> {
    value.trim().parse().map_err(|_| {
        SolverError::Configuration(format!("{} must be a number, got '{}'", name, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[solver]
observed_arc_years = 12.5
tolerance_percent = 0.1
max_iterations = 50
"#;

        let config = SolverConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.observed_arc_years, 12.5);
        assert_eq!(config.tolerance_percent, 0.1);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let toml = r#"
[solver]
max_iterations = 10
"#;

        let config = SolverConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.observed_arc_years, DEFAULT_OBSERVED_ARC_YEARS);
        assert_eq!(config.tolerance_percent, DEFAULT_TOLERANCE_PERCENT);
        assert_eq!(config.max_iterations, 10);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = SolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        for toml in [
            "[solver]\nmax_iterations = 0",
            "[solver]\ntolerance_percent = -1.0",
            "[solver]\nobserved_arc_years = 0.0",
        ] {
            let err = SolverConfig::from_toml_str(toml).unwrap_err();
            assert!(matches!(err, SolverError::Configuration(_)), "{toml}");
        }
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = SolverConfig::from_toml_str("[solver\nmax_iterations = 3").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = SolverConfig::from_file("/nonexistent/double-star.toml").unwrap_err();
        assert!(matches!(err, SolverError::Configuration(_)));
    }
}
