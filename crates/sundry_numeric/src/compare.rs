//! Near-zero and near-equal comparisons.
//!
//! Equality tolerance is relative: two values are nearly equal when their
//! difference is below the larger magnitude scaled by the type's near-zero
//! threshold.

use std::ops::{Mul, Sub};

use sundry_foundation::NearZero;

/// Returns true if `value` is smaller in magnitude than the type's
/// near-zero threshold.
///
/// # Examples
///
/// ```
/// use sundry_numeric::compare::is_nearly_zero;
///
/// assert!(is_nearly_zero(1e-20_f64));
/// assert!(!is_nearly_zero(1e-3_f64));
/// ```
#[inline]
#[must_use]
pub fn is_nearly_zero<T: NearZero>(value: T) -> bool {
    value.magnitude() < T::NEAR_ZERO
}

/// Returns true if `a` and `b` are identical or differ by less than
/// `max(|a|, |b|) * NEAR_ZERO`.
///
/// NaN is never nearly equal to anything, including itself.
#[must_use]
pub fn is_nearly_equal<T>(a: T, b: T) -> bool
where
    T: NearZero + Sub<Output = T> + Mul<Output = T>,
{
    if a == b {
        return true;
    }

    // Opposite signs differ by at least the larger magnitude. Decimal
    // subtraction below must not see them: MAX - MIN overflows.
    if (a < T::ZERO) != (b < T::ZERO) {
        return false;
    }

    let (ma, mb) = (a.magnitude(), b.magnitude());
    let larger = if ma > mb { ma } else { mb };
    let epsilon = larger * T::NEAR_ZERO;
    (a - b).magnitude() < epsilon
}

/// Returns `target` if `value` is nearly equal to it, else `value`.
#[inline]
#[must_use]
pub fn snap_to<T>(value: T, target: T) -> T
where
    T: NearZero + Sub<Output = T> + Mul<Output = T>,
{
    if is_nearly_equal(value, target) {
        target
    } else {
        value
    }
}

/// Returns exactly zero if `value` is nearly zero, else `value`.
#[inline]
#[must_use]
pub fn snap_to_zero<T: NearZero>(value: T) -> T {
    if is_nearly_zero(value) { T::ZERO } else { value }
}
