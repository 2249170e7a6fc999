//! Kepler's third law and the angular-size distance.

use std::f64::consts::PI;

use qtty::{Days, Kilograms, Meters, Parsec, Parsecs, Radians, Second, Seconds, Years};

use crate::constants::{GRAVITATIONAL_CONSTANT, JULIAN_YEAR_DAYS};
use crate::error::{SolverError, SolverResult};

/// Orbital period in seconds, counting Julian years.
pub fn period_in_seconds(period: Years) -> Seconds {
    Days::new(period.value() * JULIAN_YEAR_DAYS).to::<Second>()
}

/// True semi-major axis of a two-body orbit.
///
/// `a³ = G (m1 + m2) P² / 4π²`. The cube root is taken of `P²` and of
/// `G M / 4π²` separately so the ~1e19 s² and ~1e-11 factors never meet.
pub fn semi_major_axis(period: Years, total_mass: Kilograms) -> SolverResult<Meters> {
    let p = period_in_seconds(period).value();
    let m = total_mass.value();
    if p <= 0.0 || !p.is_finite() {
        return Err(SolverError::domain("Kepler's third law (period)", p));
    }
    if m <= 0.0 || !m.is_finite() {
        return Err(SolverError::domain("Kepler's third law (mass)", m));
    }

    let period_term = (p * p).cbrt();
    let mass_term = (GRAVITATIONAL_CONSTANT * m / (4.0 * PI * PI)).cbrt();
    Ok(Meters::new(period_term * mass_term))
}

/// Distance at which a length `semi_major` subtends the angle `angular_semi_major`.
pub fn distance_from_angular_size(
    semi_major: Parsecs,
    angular_semi_major: Radians,
) -> SolverResult<Parsecs> {
    let tan = angular_semi_major.tan();
    if tan <= 0.0 || !tan.is_finite() {
        return Err(SolverError::domain("tan", angular_semi_major.value()));
    }
    Ok(Parsecs::new(semi_major.value() / tan))
}

/// Distance to the system given its period, total mass and angular semi-major axis.
pub fn system_distance(
    period: Years,
    total_mass: Kilograms,
    angular_semi_major: Radians,
) -> SolverResult<Parsecs> {
    let a = semi_major_axis(period, total_mass)?.to::<Parsec>();
    distance_from_angular_size(a, angular_semi_major)
}
