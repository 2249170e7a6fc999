use qtty::{Arcseconds, Radian, Radians};
use serde::Serialize;

use crate::constants::{
    REFERENCE_MAGNITUDE_1, REFERENCE_MAGNITUDE_2, REFERENCE_SEMI_MAJOR_ARCSEC,
    REFERENCE_SEMI_MINOR_ARCSEC,
};
use crate::error::{SolverError, SolverResult};

/// Observed angular and photometric measurements of a visual binary.
///
/// The projected orbit is given by its semi-axes as seen from Earth. Both are
/// converted to radians once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    semi_major: Arcseconds,
    semi_minor: Arcseconds,
    relative_magnitude_1: f64,
    relative_magnitude_2: f64,
    #[serde(skip_serializing)]
    semi_major_rad: Radians,
    #[serde(skip_serializing)]
    semi_minor_rad: Radians,
}

impl Observation {
    /// Build an observation, rejecting geometry that cannot describe an orbit.
    ///
    /// # Errors
    /// * `InvalidGeometry` if either axis is not strictly positive or the
    ///   semi-minor axis exceeds the semi-major axis. A circular orbit
    ///   (`a == b`) is accepted.
    /// * `InvalidInput` if any value is not finite.
    pub fn new(
        semi_major: Arcseconds,
        semi_minor: Arcseconds,
        relative_magnitude_1: f64,
        relative_magnitude_2: f64,
    ) -> SolverResult<Self> {
        let (a, b) = (semi_major.value(), semi_minor.value());

        for (name, value) in [
            ("semi-major axis", a),
            ("semi-minor axis", b),
            ("relative magnitude 1", relative_magnitude_1),
            ("relative magnitude 2", relative_magnitude_2),
        ] {
            if !value.is_finite() {
                return Err(SolverError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if a <= 0.0 || b <= 0.0 {
            return Err(SolverError::invalid_geometry(a, b, "axes must be positive"));
        }
        if b > a {
            return Err(SolverError::invalid_geometry(
                a,
                b,
                "semi-minor axis exceeds semi-major axis",
            ));
        }

        Ok(Self {
            semi_major,
            semi_minor,
            relative_magnitude_1,
            relative_magnitude_2,
            semi_major_rad: semi_major.to::<Radian>(),
            semi_minor_rad: semi_minor.to::<Radian>(),
        })
    }

    /// Convenience constructor taking raw arcsecond values.
    pub fn from_arcseconds(
        semi_major: f64,
        semi_minor: f64,
        relative_magnitude_1: f64,
        relative_magnitude_2: f64,
    ) -> SolverResult<Self> {
        Self::new(
            Arcseconds::new(semi_major),
            Arcseconds::new(semi_minor),
            relative_magnitude_1,
            relative_magnitude_2,
        )
    }

    /// The measurements of the reference system (a = 4.5″, b = 3.4″, 3.9 / 5.3 mag).
    pub fn reference() -> Self {
        let a = Arcseconds::new(REFERENCE_SEMI_MAJOR_ARCSEC);
        let b = Arcseconds::new(REFERENCE_SEMI_MINOR_ARCSEC);
        Self {
            semi_major: a,
            semi_minor: b,
            relative_magnitude_1: REFERENCE_MAGNITUDE_1,
            relative_magnitude_2: REFERENCE_MAGNITUDE_2,
            semi_major_rad: a.to::<Radian>(),
            semi_minor_rad: b.to::<Radian>(),
        }
    }

    pub fn semi_major(&self) -> Arcseconds {
        self.semi_major
    }

    pub fn semi_minor(&self) -> Arcseconds {
        self.semi_minor
    }

    pub fn semi_major_rad(&self) -> Radians {
        self.semi_major_rad
    }

    pub fn semi_minor_rad(&self) -> Radians {
        self.semi_minor_rad
    }

    pub fn relative_magnitude_1(&self) -> f64 {
        self.relative_magnitude_1
    }

    pub fn relative_magnitude_2(&self) -> f64 {
        self.relative_magnitude_2
    }
}
