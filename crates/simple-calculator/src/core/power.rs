//! Power operation

/// Default base shown by the power form
pub const DEFAULT_BASE: f64 = 2.0;

/// Default exponent shown by the power form
pub const DEFAULT_EXPONENT: f64 = 2.0;

/// Computes `base ^ exponent`
///
/// Unrestricted: a negative base with a fractional exponent yields NaN and
/// out-of-range magnitudes yield ±inf. Wrap the call in a
/// [`ResultGuard`](crate::core::ResultGuard) to reject those.
#[must_use]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}
