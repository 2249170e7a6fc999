//! Physical constants and solver defaults.
//!
//! The solar values are the ones the mass–luminosity calibration was built
//! against, not the IAU nominal values `qtty` uses for its `SolarMass` and
//! `SolarLuminosity` units. Mixing the two would shift every derived mass.

/// Solar mass [kg].
pub const SOLAR_MASS_KG: f64 = 1.9891e30;

/// Solar luminosity [W].
pub const SOLAR_LUMINOSITY_W: f64 = 3.83e26;

/// Absolute visual magnitude of the Sun.
pub const SOLAR_ABSOLUTE_MAGNITUDE: f64 = 4.8;

/// Newtonian gravitational constant [m^3 kg^-1 s^-2].
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;

/// Days in a Julian year, used to turn the orbital period into seconds.
pub const JULIAN_YEAR_DAYS: f64 = 365.25;

/// Exponent of the empirical mass–luminosity power law, `L ∝ M^3.5`.
pub const MASS_LUMINOSITY_EXPONENT: f64 = 3.5;

/// Reference distance of the absolute magnitude scale [pc].
pub const ABSOLUTE_MAGNITUDE_DISTANCE_PC: f64 = 10.0;

/// Time span over which the partial orbital arc was observed [yr].
pub const DEFAULT_OBSERVED_ARC_YEARS: f64 = 11.0;

/// A tracked value changing by this many percent or more keeps the iteration going.
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 1.0;

/// Upper bound on solver iterations before reporting non-convergence.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Reference observation: semi-major axis [arcsec].
pub const REFERENCE_SEMI_MAJOR_ARCSEC: f64 = 4.5;

/// Reference observation: semi-minor axis [arcsec].
pub const REFERENCE_SEMI_MINOR_ARCSEC: f64 = 3.4;

/// Reference observation: relative magnitude of the primary.
pub const REFERENCE_MAGNITUDE_1: f64 = 3.9;

/// Reference observation: relative magnitude of the secondary.
pub const REFERENCE_MAGNITUDE_2: f64 = 5.3;
