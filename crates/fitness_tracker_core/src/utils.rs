//! Numeric helpers shared by the training formulas and the dispatcher.

use crate::TrainingError;

/// Floor division of two floats.
///
/// The quotient is derived from the `fmod` remainder rather than from
/// `(a / b).floor()`, so inexact divisions such as `1.0 / 0.1` land on the
/// mathematically correct integer (`9.0`, not `10.0`).
///
/// `b` must be non-zero; a zero divisor yields NaN.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div != 0.0 {
        let floor = div.floor();
        if div - floor > 0.5 {
            floor + 1.0
        } else {
            floor
        }
    } else {
        0.0_f64.copysign(a / b)
    }
}

/// Convert a raw reading into a count (steps, laps).
pub fn to_count(field: &'static str, value: f64) -> Result<u32, TrainingError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidCount { field, value })
    }
}

/// Accept a strictly positive, finite reading.
pub(crate) fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}
