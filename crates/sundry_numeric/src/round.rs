//! Rounding to integers with saturation.

use num_traits::{NumCast, PrimInt};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest integer of type `I`, ties away from zero.
///
/// Results beyond the range of `I` saturate to `I::min_value()` or
/// `I::max_value()`; NaN rounds to zero.
///
/// # Examples
///
/// ```
/// use sundry_numeric::round::RoundSaturating;
///
/// assert_eq!(2.5_f64.round_to::<i32>(), 3);
/// assert_eq!(f64::MAX.round_to::<i32>(), i32::MAX);
/// assert_eq!((-300.0_f32).round_to::<u8>(), 0);
/// ```
pub trait RoundSaturating {
    /// Rounds `self` into `I`.
    #[must_use]
    fn round_to<I: PrimInt>(self) -> I;
}

fn saturate<I: PrimInt>(converted: Option<I>, positive: bool) -> I {
    match converted {
        Some(value) => value,
        None if positive => I::max_value(),
        None => I::min_value(),
    }
}

impl RoundSaturating for f64 {
    fn round_to<I: PrimInt>(self) -> I {
        if self.is_nan() {
            return I::zero();
        }
        let rounded = self.round();
        saturate(<I as NumCast>::from(rounded), rounded > 0.0)
    }
}

impl RoundSaturating for f32 {
    fn round_to<I: PrimInt>(self) -> I {
        <f64 as From<f32>>::from(self).round_to()
    }
}

impl RoundSaturating for Decimal {
    fn round_to<I: PrimInt>(self) -> I {
        let rounded = self.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        saturate(<I as NumCast>::from(rounded), rounded.is_sign_positive())
    }
}
