//! Linear interpolation and its inverse.

use std::ops::{Add, Div, Mul, Sub};

use rust_decimal::Decimal;
use sundry_foundation::{Error, ErrorContext, FloatSentinel, Result};
use tracing::debug;

use crate::compare::is_nearly_equal;

/// Interpolates between `first` and `second`.
///
/// `amount` is not clamped: values outside `[0, 1]` extrapolate past the
/// endpoints.
///
/// # Examples
///
/// ```
/// use sundry_numeric::interpolate::lerp;
///
/// assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
/// assert_eq!(lerp(10.0, 20.0, 2.0), 30.0);
/// ```
#[inline]
#[must_use]
pub fn lerp<T>(first: T, second: T, amount: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    first + (second - first) * amount
}

/// Solves `lerp(first, second, amount) == result` for `amount`.
///
/// When `first` and `second` are nearly equal the interval has collapsed to
/// a point: the answer is one half if `result` lies on that point, and NaN
/// otherwise.
#[must_use]
pub fn inverse_lerp<T>(first: T, second: T, result: T) -> T
where
    T: FloatSentinel + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    if is_nearly_equal(first, second) {
        return if is_nearly_equal(result, first) {
            T::HALF
        } else {
            T::NAN
        };
    }
    (result - first) / (second - first)
}

/// Decimal counterpart of [`inverse_lerp`].
///
/// `Decimal` has no NaN, so a collapsed interval that does not contain
/// `result` is reported as [`ErrorKind::OutOfRange`](sundry_foundation::ErrorKind::OutOfRange).
///
/// # Errors
///
/// Returns `OutOfRange` for an unsolvable degenerate interval and
/// `ArithmeticOverflow` if the span between the endpoints overflows.
pub fn inverse_lerp_decimal(first: Decimal, second: Decimal, result: Decimal) -> Result<Decimal> {
    if is_nearly_equal(first, second) {
        if is_nearly_equal(result, first) {
            return Ok(Decimal::new(5, 1));
        }
        debug!(%first, %second, %result, "no interpolation amount for collapsed interval");
        return Err(Error::out_of_range(
            "result",
            result,
            format!("interval [{first}, {second}] is a single point"),
        )
        .with_context(ErrorContext::new().with_operation("inverse_lerp_decimal")));
    }

    let overflow = || {
        Error::arithmetic_overflow("decimal interpolation")
            .with_context(ErrorContext::new().with_operation("inverse_lerp_decimal"))
    };
    let offset = result.checked_sub(first).ok_or_else(overflow)?;
    let span = second.checked_sub(first).ok_or_else(overflow)?;
    offset.checked_div(span).ok_or_else(overflow)
}
