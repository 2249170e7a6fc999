//! Relative-change test used to decide whether the solver has settled.

/// Absolute change from `old_value` to `new_value`, in percent of `old_value`.
///
/// Returns `∞` or `NaN` when `old_value` is zero and a negative number when
/// `old_value` is negative.
pub fn percentage_difference(old_value: f64, new_value: f64) -> f64 {
    (old_value - new_value).abs() * 100.0 / old_value
}

/// Whether moving from `old_value` to `new_value` is too large a change to
/// call the value settled.
///
/// Only a difference in `[0, tolerance_percent)` is small enough; a change
/// of exactly `tolerance_percent` is too big. A zero `old_value` (the first
/// solver step starts from zero distance and magnitudes) is always too big,
/// as are negative and `NaN` differences.
pub fn percentage_difference_too_big(old_value: f64, new_value: f64, tolerance_percent: f64) -> bool {
    if old_value == 0.0 {
        return true;
    }
    let diff = percentage_difference(old_value, new_value);
    !(diff >= 0.0 && diff < tolerance_percent)
}
