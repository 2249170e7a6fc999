//! Text and JSON rendering of a solved system.

use std::fmt;

use serde::Serialize;

use crate::models::{Observation, Solution, SolutionState};

/// Observation and solution, rendered together.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Report<'a> {
    pub observation: &'a Observation,
    pub solution: &'a Solution,
}

impl<'a> Report<'a> {
    pub fn new(observation: &'a Observation, solution: &'a Solution) -> Self {
        Self {
            observation,
            solution,
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.solution;
        writeln!(f, "******** RESULTS ********")?;
        writeln!(
            f,
            "Orbital period of the system: {:.2} years",
            s.orbital_period().value()
        )?;
        writeln!(f, "Distance of the system: {:.2} pc", s.distance().value())?;
        writeln!(
            f,
            "Star 1: mass {} kg, absolute magnitude {:.2}",
            significant(s.mass_1().value(), 3),
            s.abs_magnitude_1()
        )?;
        write!(
            f,
            "Star 2: mass {} kg, absolute magnitude {:.2}",
            significant(s.mass_2().value(), 3),
            s.abs_magnitude_2()
        )
    }
}

/// Block printed for each iteration in verbose mode.
pub fn iteration_block(iteration: usize, state: &SolutionState) -> String {
    format!(
        "*** Iteration {} ***\n\
         Distance of the system: {} pc\n\
         Star 1: mass {} kg, absolute magnitude {}\n\
         Star 2: mass {} kg, absolute magnitude {}",
        iteration,
        state.distance.value(),
        state.mass_1.value(),
        state.abs_magnitude_1,
        state.mass_2.value(),
        state.abs_magnitude_2
    )
}

/// `value` rounded to `digits` significant digits, in scientific notation
/// when the exponent is outside `[-5, digits)`.
pub fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let digits = digits.max(1);
    let mut exponent = value.abs().log10().floor() as i32;
    // Rounding can carry into the next power of ten (99.96 -> 100).
    let scale = 10f64.powi(digits as i32 - 1 - exponent);
    if (value.abs() * scale).round() >= 10f64.powi(digits as i32) {
        exponent += 1;
    }
    if exponent < -5 || exponent >= digits as i32 {
        format!("{:.*e}", digits - 1, value)
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::solve;

    #[test]
    fn test_significant_digits() {
        assert_eq!(significant(1.7563440051e30, 3), "1.76e30");
        assert_eq!(significant(1.2150931783e30, 3), "1.22e30");
        assert_eq!(significant(5.31395, 3), "5.31");
        assert_eq!(significant(95.58, 3), "95.6");
        assert_eq!(significant(0.0, 3), "0");
    }

    #[test]
    fn test_significant_digits_after_rounding_carry() {
        assert_eq!(significant(99.96, 3), "100");
        assert_eq!(significant(999.6, 3), "1.00e3");
        assert_eq!(significant(9.996, 3), "10.0");
        assert_eq!(significant(-99.96, 3), "-100");
    }

    #[test]
    fn test_reference_report_text() {
        let obs = Observation::reference();
        let solution = solve(&obs).unwrap();
        let text = Report::new(&obs, &solution).to_string();

        let expected = "******** RESULTS ********\n\
                        Orbital period of the system: 95.58 years\n\
                        Distance of the system: 5.31 pc\n\
                        Star 1: mass 1.76e30 kg, absolute magnitude 5.27\n\
                        Star 2: mass 1.22e30 kg, absolute magnitude 6.67";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_report_json_fields() {
        let obs = Observation::reference();
        let solution = solve(&obs).unwrap();
        let json = Report::new(&obs, &solution).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["observation"]["semi_major"], 4.5);
        assert_eq!(value["solution"]["iterations"], 4);
        let distance = value["solution"]["distance"].as_f64().unwrap();
        assert!((distance - 5.314).abs() < 1e-3);
        assert!(value["solution"]["mass_1"].as_f64().unwrap() > 1e30);
    }

    #[test]
    fn test_iteration_block_header() {
        let block = iteration_block(2, &SolutionState::initial());
        assert!(block.starts_with("*** Iteration 2 ***\n"));
        assert_eq!(block.lines().count(), 4);
    }
}
