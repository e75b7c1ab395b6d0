//! Rounding and fixed-precision formatting shared by the counter and the
//! results screen.
//!
//! Midpoints round to even, which is what the game's runtime does for
//! `Math.Round`.

/// Highest precision accepted in configuration. `f64` carries roughly 15
/// significant decimal digits.
pub const MAX_DECIMAL_PRECISION: u32 = 15;

/// Round `value` to `precision` decimal digits, ties to even.
///
/// Non-finite input is returned unchanged.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision.min(MAX_DECIMAL_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// Round a fractional projection to the nearest integer, ties to even.
pub fn round_to_int(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.round_ties_even() as i32
}

/// Format with exactly `precision` decimals, capped at
/// [`MAX_DECIMAL_PRECISION`]. Precision 0 gives no decimal separator.
pub fn format_fixed(value: f64, precision: u32) -> String {
    format!("{:.*}", precision.min(MAX_DECIMAL_PRECISION) as usize, value)
}

/// Format a delta with an explicit sign. Values that round to zero are
/// shown as positive.
pub fn format_signed(value: f64, precision: u32) -> String {
    let rounded = round_to_precision(value, precision);
    let sign = if rounded < 0.0 { '-' } else { '+' };
    format!("{}{}", sign, format_fixed(rounded.abs(), precision))
}

/// Percentage of `part` in `total`. A zero total counts as 100%.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 100.0;
    }
    part / total * 100.0
}
