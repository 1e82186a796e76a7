//! Order-independent clamping, including bounds of a different numeric type.

use num_traits::{Bounded, NumCast, Zero};

/// Restricts `value` to the closed range between `min` and `max`.
///
/// The bounds may be given in either order.
///
/// # Examples
///
/// ```
/// use sundry_numeric::clamp::clamp;
///
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(15, 10, 0), 10);
/// ```
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps `value` using bounds expressed in another numeric type `B`.
///
/// Each bound is converted into `V` first. Fractional bounds truncate toward
/// zero, bounds beyond `V`'s range saturate to `V::min_value()` or
/// `V::max_value()`, and a NaN bound leaves that side unbounded.
///
/// # Examples
///
/// ```
/// use sundry_numeric::clamp::clamp_saturating;
///
/// assert_eq!(clamp_saturating(200_u8, -1e10_f64, 1e10), 200);
/// assert_eq!(clamp_saturating(200_u8, 0_i64, 100), 100);
/// ```
#[must_use]
pub fn clamp_saturating<V, B>(value: V, min: B, max: B) -> V
where
    V: PartialOrd + Bounded + NumCast,
    B: Copy + PartialOrd + NumCast + Zero,
{
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    let lower = saturate_bound(min, V::min_value());
    let upper = saturate_bound(max, V::max_value());
    clamp(value, lower, upper)
}

fn saturate_bound<V, B>(bound: B, unbounded: V) -> V
where
    V: Bounded + NumCast,
    B: Copy + PartialOrd + NumCast + Zero,
{
    // NaN is the only value not comparable with itself.
    if bound.partial_cmp(&bound).is_none() {
        return unbounded;
    }
    match <V as NumCast>::from(bound) {
        Some(converted) => converted,
        None if bound > B::zero() => V::max_value(),
        None => V::min_value(),
    }
}
