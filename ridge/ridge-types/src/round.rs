//! Fixed-precision rounding.
//!
//! Every derived coordinate is rounded immediately after it is computed so
//! that reported dimensions and emitted geometry agree exactly.

/// Number of decimals kept by default.
pub const DEFAULT_PRECISION: u32 = 4;

/// Most decimals an `f64` coordinate can carry meaningfully.
pub const MAX_PRECISION: u32 = 15;

/// Round `value` to `decimals` decimal places.
///
/// A machine epsilon is added before scaling so that values such as `1.005`
/// round up the way a decimal reader expects. `decimals` is capped at
/// [`MAX_PRECISION`].
///
/// # Example
///
/// ```
/// use ridge_types::round_to;
///
/// assert_eq!(round_to(1.23456, 4), 1.2346);
/// assert_eq!(round_to(2.0, 4), 2.0);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    // At most 15, so the cast is lossless and the factor finite.
    #[allow(clippy::cast_possible_wrap)]
    let factor = 10f64.powi(decimals.min(MAX_PRECISION) as i32);
    let rounded = ((value + f64::EPSILON) * factor).round() / factor;
    // Avoid emitting "-0" in output files.
    if rounded == 0.0 { 0.0 } else { rounded }
}
