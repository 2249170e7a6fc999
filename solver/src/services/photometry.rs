//! Distance modulus and the mass–luminosity relation.
//!
//! Magnitudes follow Pogson's scale: five magnitudes are a factor of 100 in
//! flux. Masses follow the main-sequence power law `L/L☉ = (M/M☉)^3.5`.

use qtty::{Kilograms, Parsecs, Watts};

use crate::constants::{
    ABSOLUTE_MAGNITUDE_DISTANCE_PC, MASS_LUMINOSITY_EXPONENT, SOLAR_ABSOLUTE_MAGNITUDE,
    SOLAR_LUMINOSITY_W, SOLAR_MASS_KG,
};
use crate::error::{SolverError, SolverResult};

/// Absolute magnitude of a star with the given relative magnitude at `distance`.
///
/// `M = m + 5 (1 - log10 d)`.
///
/// # Errors
/// `Domain` if `distance` is not a positive finite number.
pub fn absolute_magnitude(relative_magnitude: f64, distance: Parsecs) -> SolverResult<f64> {
    Ok(relative_magnitude - distance_modulus(distance)?)
}

/// Relative magnitude a star of absolute magnitude `absolute_magnitude` shows at `distance`.
pub fn apparent_magnitude(absolute_magnitude: f64, distance: Parsecs) -> SolverResult<f64> {
    Ok(absolute_magnitude + distance_modulus(distance)?)
}

/// `m - M = 5 (log10 d - 1)` for `d` in parsecs.
pub fn distance_modulus(distance: Parsecs) -> SolverResult<f64> {
    let d = distance.value();
    if d <= 0.0 || !d.is_finite() {
        return Err(SolverError::domain("log10", d));
    }
    Ok(5.0 * (d.log10() - ABSOLUTE_MAGNITUDE_DISTANCE_PC.log10()))
}

/// Luminosity of a star from its absolute magnitude, relative to the Sun.
pub fn luminosity(absolute_magnitude: f64) -> Watts {
    Watts::new(
        SOLAR_LUMINOSITY_W * 100f64.powf((SOLAR_ABSOLUTE_MAGNITUDE - absolute_magnitude) / 5.0),
    )
}

/// Mass of a main-sequence star of the given luminosity.
///
/// # Errors
/// `Domain` if the luminosity is negative or not finite.
pub fn mass_from_luminosity(luminosity: Watts) -> SolverResult<Kilograms> {
    let l = luminosity.value();
    if l < 0.0 || !l.is_finite() {
        return Err(SolverError::domain("mass-luminosity relation", l));
    }
    Ok(Kilograms::new(
        SOLAR_MASS_KG * (l / SOLAR_LUMINOSITY_W).powf(1.0 / MASS_LUMINOSITY_EXPONENT),
    ))
}
