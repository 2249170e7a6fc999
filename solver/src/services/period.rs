//! Orbital period from the fraction of the projected ellipse swept while observed.
//!
//! By Kepler's second law the radius vector sweeps equal areas in equal
//! times, so the full period is the observed time span scaled by the ratio of
//! the whole ellipse to the swept segment.

use std::f64::consts::PI;

use log::debug;
use qtty::{Radians, Years};

use crate::error::{SolverError, SolverResult};

/// Focal half-distance `h = sqrt(a² - b²)` of the projected ellipse.
pub fn focal_half_distance(semi_major: Radians, semi_minor: Radians) -> f64 {
    let (a, b) = (semi_major.value(), semi_minor.value());
    (a * a - b * b).sqrt()
}

/// Area of the elliptical segment swept during the observed arc.
///
/// `a² (acos(h/a) - h sqrt(a² - h²) / a²)`. For a circle `h = 0` and the
/// segment is half the disc.
pub fn segment_area(semi_major: Radians, semi_minor: Radians) -> SolverResult<f64> {
    let a = semi_major.value();
    let h = focal_half_distance(semi_major, semi_minor);
    let ratio = h / a;
    if !(-1.0..=1.0).contains(&ratio) {
        return Err(SolverError::domain("acos", ratio));
    }

    let a2 = a * a;
    let area = a2 * (ratio.acos() - h * (a2 - h * h).sqrt() / a2);
    if area <= 0.0 || !area.is_finite() {
        return Err(SolverError::domain("segment area", area));
    }
    Ok(area)
}

/// Area `π a²` used as the full-orbit reference.
pub fn ellipse_area(semi_major: Radians) -> f64 {
    let a = semi_major.value();
    PI * a * a
}

/// Ratio of the full ellipse area to the swept segment.
pub fn area_ratio(semi_major: Radians, semi_minor: Radians) -> SolverResult<f64> {
    Ok(ellipse_area(semi_major) / segment_area(semi_major, semi_minor)?)
}

/// Orbital period of the system.
///
/// # Arguments
/// * `semi_major`, `semi_minor` - Projected semi-axes as angles
/// * `observed_arc` - Time span over which the partial arc was observed
///
/// # Errors
/// * `InvalidGeometry` if an axis is not positive or `semi_minor > semi_major`
/// * `Domain` if the segment area degenerates
pub fn orbital_period(
    semi_major: Radians,
    semi_minor: Radians,
    observed_arc: Years,
) -> SolverResult<Years> {
    let (a, b) = (semi_major.value(), semi_minor.value());
    if !(a > 0.0 && b > 0.0) {
        return Err(SolverError::invalid_geometry(a, b, "axes must be positive"));
    }
    if b > a {
        return Err(SolverError::invalid_geometry(
            a,
            b,
            "semi-minor axis exceeds semi-major axis",
        ));
    }

    let ratio = area_ratio(semi_major, semi_minor)?;
    debug!("Ellipse to segment area ratio {:.2}", ratio);

    let period = Years::new(observed_arc.value() * ratio);
    debug!("Orbital period {:.2} years", period.value());
    Ok(period)
}
