//! Integration tests for solver configuration loading.

mod support;

use std::io::Write;

use double_star::{Observation, OrbitalSolver, SolverConfig, SolverError};
use support::{with_scoped_env, with_solver_env};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_from_file() {
    let file = write_config(
        r#"
[solver]
observed_arc_years = 11.0
tolerance_percent = 0.01
max_iterations = 25
"#,
    );

    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.max_iterations, 25);
    assert_eq!(config.tolerance_percent, 0.01);

    let solution = OrbitalSolver::new(Observation::reference(), config)
        .unwrap()
        .solve()
        .unwrap();
    assert_eq!(solution.iterations(), 7);
}

#[test]
fn test_config_file_with_unknown_table_still_parses_solver() {
    let file = write_config(
        r#"
[output]
format = "json"

[solver]
max_iterations = 5
"#,
    );

    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.max_iterations, 5);
}

#[test]
fn test_env_overrides() {
    let config = with_solver_env(
        &[
            ("DOUBLE_STAR_MAX_ITERATIONS", Some("12")),
            ("DOUBLE_STAR_TOLERANCE", Some("0.5")),
            ("DOUBLE_STAR_OBSERVED_ARC", Some(" 22 ")),
        ],
        || SolverConfig::default().with_env_overrides(),
    )
    .unwrap();

    assert_eq!(config.max_iterations, 12);
    assert_eq!(config.tolerance_percent, 0.5);
    assert_eq!(config.observed_arc_years, 22.0);
}

#[test]
fn test_env_without_overrides_keeps_file_values() {
    let file = write_config("[solver]\nmax_iterations = 8\n");
    let config = with_solver_env(&[], || {
        SolverConfig::from_file(file.path())
            .and_then(SolverConfig::with_env_overrides)
    })
    .unwrap();

    assert_eq!(config.max_iterations, 8);
    assert_eq!(config.tolerance_percent, 1.0);
}

#[test]
fn test_unparsable_env_value_is_rejected() {
    let err = with_solver_env(&[("DOUBLE_STAR_MAX_ITERATIONS", Some("many"))], || {
        SolverConfig::default().with_env_overrides()
    })
    .unwrap_err();

    assert!(matches!(err, SolverError::Configuration(_)));
    assert!(err.to_string().contains("DOUBLE_STAR_MAX_ITERATIONS"));
}

#[test]
fn test_invalid_env_value_fails_validation() {
    let err = with_solver_env(&[("DOUBLE_STAR_TOLERANCE", Some("0"))], || {
        SolverConfig::default().with_env_overrides()
    })
    .unwrap_err();

    assert!(matches!(err, SolverError::Configuration(_)));
}

#[test]
fn test_scoped_env_restores_previous_state() {
    let key = "DOUBLE_STAR_RESTORE_CHECK";
    let inside = with_scoped_env(&[(key, Some("1"))], || std::env::var(key).ok());

    assert_eq!(inside.as_deref(), Some("1"));
    assert!(std::env::var(key).is_err());
}
