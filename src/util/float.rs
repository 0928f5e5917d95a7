//! floating point utilities

use crate::RealScalar;

/// Rounds to the given number of decimal places, with ties going away from
/// zero.
///
/// Values that are too large to carry any fractional digits, as well as
/// non-finite values, are returned unchanged.
pub(crate) fn round_half_up<T: RealScalar>(x: T, decimals: u32) -> T {
    if !x.is_finite() {
        return x;
    }
    let scale = T::from_f64_const(10.0).powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = x * scale;
    if !scaled.is_finite() || !scale.is_finite() {
        return x;
    }
    let rounded = scaled.round() / scale;
    // normalize negative zero
    if rounded.is_zero() {
        return T::zero();
    }
    rounded
}

/// Makes a degenerate float normal again by either clamping it or replacing
/// NaN with zero.
pub fn f64_make_normal(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }

    if x.is_infinite() && x.is_sign_positive() {
        return f64::MAX;
    }

    if x.is_infinite() && x.is_sign_negative() {
        return f64::MIN;
    }

    if x.is_subnormal() {
        return 0.0;
    }
    x
}

/// If a float is subnormal or zero, bump it to the nearest normal number or
/// `MIN_POSITIVE` if it's zero.
pub fn f64_make_nonzero(x: f64) -> f64 {
    let x = f64_make_normal(x);
    if x.abs() < f64::MIN_POSITIVE {
        f64::MIN_POSITIVE.copysign(x)
    } else {
        x
    }
}
