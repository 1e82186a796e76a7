//! Square root for fixed-precision decimals.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use sundry_foundation::{Error, ErrorContext, Result};
use tracing::{debug, trace};

/// Upper bound on Newton steps. A good `f64` seed converges in about three.
const MAX_ITERATIONS: u32 = 32;

/// Computes the square root of `value` by Newton's method.
///
/// The iteration is seeded from the `f64` square root and refined with
/// `next = (current + value / current) / 2` until it stops changing at
/// `Decimal` precision. If the last digit oscillates between two
/// neighbours, the smaller one is returned.
///
/// # Errors
///
/// Returns [`OutOfRange`](sundry_foundation::ErrorKind::OutOfRange) for
/// negative input, and `ArithmeticOverflow` if a refinement step overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sundry_numeric::sqrt::sqrt_decimal;
///
/// assert_eq!(sqrt_decimal(Decimal::new(4, 0)).unwrap(), Decimal::new(2, 0));
/// assert!(sqrt_decimal(Decimal::new(-1, 0)).is_err());
/// ```
pub fn sqrt_decimal(value: Decimal) -> Result<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if value.is_sign_negative() {
        debug!(%value, "rejected negative square root input");
        return Err(
            Error::out_of_range("value", value, "square root of a negative number")
                .with_context(ErrorContext::new().with_operation("sqrt_decimal")),
        );
    }

    let overflow = || {
        Error::arithmetic_overflow("decimal square root refinement")
            .with_context(ErrorContext::new().with_operation("sqrt_decimal"))
    };

    let mut current = value
        .to_f64()
        .map(f64::sqrt)
        .and_then(Decimal::from_f64)
        .filter(|seed| !seed.is_zero())
        .unwrap_or(Decimal::ONE);
    let mut previous = None;

    for iteration in 1..=MAX_ITERATIONS {
        let quotient = value.checked_div(current).ok_or_else(overflow)?;
        let next = current.checked_add(quotient).ok_or_else(overflow)? / Decimal::TWO;

        if next == current {
            trace!(%value, iterations = iteration, "decimal square root converged");
            return Ok(next);
        }
        if previous == Some(next) {
            trace!(%value, iterations = iteration, "decimal square root settled on a two-cycle");
            return Ok(next.min(current));
        }

        previous = Some(current);
        current = next;
    }

    debug!(%value, "decimal square root hit the iteration limit");
    Ok(current)
}
