//! Double Star command-line solver
//!
//! Estimates period, distance, absolute magnitudes and masses of a visual
//! binary from its projected orbit and the magnitudes of both components.
//!
//! # Usage
//!
//! ```bash
//! # Reference system (a = 4.5", b = 3.4", m1 = 3.9, m2 = 5.3)
//! cargo run --bin double-star
//!
//! # Custom observation, printing every iteration
//! cargo run --bin double-star -- --semi-major 2.1 --semi-minor 1.7 \
//!   --magnitude1 6.2 --magnitude2 7.0 --verbose
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter, e.g. `debug` or `double_star=debug` (default: warn)
//! - `DOUBLE_STAR_MAX_ITERATIONS`, `DOUBLE_STAR_TOLERANCE`,
//!   `DOUBLE_STAR_OBSERVED_ARC`: solver overrides, below command-line flags

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use double_star::constants::{
    REFERENCE_MAGNITUDE_1, REFERENCE_MAGNITUDE_2, REFERENCE_SEMI_MAJOR_ARCSEC,
    REFERENCE_SEMI_MINOR_ARCSEC,
};
use double_star::report::{iteration_block, Report};
use double_star::{Observation, OrbitalSolver, SolutionState, SolverConfig};

/// Physical parameters of a visual binary star.
#[derive(Debug, Parser)]
#[command(author, version, about = "Visual binary star orbit solver")]
struct Args {
    /// Angular semi-major axis of the projected orbit [arcsec].
    #[arg(long, default_value_t = REFERENCE_SEMI_MAJOR_ARCSEC)]
    semi_major: f64,

    /// Angular semi-minor axis of the projected orbit [arcsec].
    #[arg(long, default_value_t = REFERENCE_SEMI_MINOR_ARCSEC)]
    semi_minor: f64,

    /// Relative magnitude of the primary.
    #[arg(long, default_value_t = REFERENCE_MAGNITUDE_1, allow_negative_numbers = true)]
    magnitude1: f64,

    /// Relative magnitude of the secondary.
    #[arg(long, default_value_t = REFERENCE_MAGNITUDE_2, allow_negative_numbers = true)]
    magnitude2: f64,

    /// TOML configuration file. Defaults to ./double-star.toml if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Iteration cap before giving up.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Convergence tolerance [%].
    #[arg(long)]
    tolerance: Option<f64>,

    /// Time span over which the partial arc was observed [yr].
    #[arg(long)]
    observed_arc: Option<f64>,

    /// Print every iteration.
    #[arg(short, long)]
    verbose: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn solver_config(&self) -> anyhow::Result<SolverConfig> {
        let base = match &self.config {
            Some(path) => SolverConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SolverConfig::from_default_location()?.unwrap_or_default(),
        };
        let mut config = base.with_env_overrides()?;

        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance_percent = tolerance;
        }
        if let Some(observed_arc) = self.observed_arc {
            config.observed_arc_years = observed_arc;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Filter from a `RUST_LOG`-style directive string, falling back to `warn`
/// when it is unset or does not parse.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.solver_config()?;
    info!("Solver configuration: {:?}", config);

    let observation =
        Observation::from_arcseconds(args.semi_major, args.semi_minor, args.magnitude1, args.magnitude2)
            .context("invalid observation")?;
    let solver = OrbitalSolver::new(observation, config)?;
    info!(
        "Orbital period {:.2} years",
        solver.orbital_period().value()
    );

    let solution = if args.verbose {
        let mut print_iteration = |iteration: usize, state: &SolutionState| {
            println!("{}", iteration_block(iteration, state));
        };
        solver.solve_with_observer(&mut print_iteration)?
    } else {
        solver.solve()?
    };

    let report = Report::new(&observation, &solution);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
