//! Squares and cubes by repeated multiplication.

use rust_decimal::Decimal;

use crate::compare::is_nearly_zero;

/// Small integer powers.
///
/// Integer overflow behaves exactly like `*`. Floating-point and decimal
/// inputs that are nearly zero produce exactly (positive) zero rather than
/// a denormal or negative-zero result.
///
/// # Panics
///
/// Integer overflow panics in debug builds and wraps in release builds.
/// `Decimal` panics whenever the result exceeds `Decimal::MAX`, e.g.
/// `Decimal::MAX.square()`; use `Decimal::checked_mul` where that can
/// happen. Floats overflow to infinity and never panic.
pub trait Powers: Sized {
    /// Returns `self * self`.
    #[must_use]
    fn square(self) -> Self;

    /// Returns `self * self * self`.
    #[must_use]
    fn cube(self) -> Self;
}

macro_rules! impl_powers_for_int {
    ($($t:ty),*) => {
        $(
            impl Powers for $t {
                #[inline]
                fn square(self) -> Self {
                    self * self
                }

                #[inline]
                fn cube(self) -> Self {
                    self * self * self
                }
            }
        )*
    };
}

impl_powers_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_powers_snapping {
    ($($t:ty),*) => {
        $(
            impl Powers for $t {
                #[inline]
                fn square(self) -> Self {
                    if is_nearly_zero(self) {
                        return <$t as sundry_foundation::NearZero>::ZERO;
                    }
                    self * self
                }

                #[inline]
                fn cube(self) -> Self {
                    if is_nearly_zero(self) {
                        return <$t as sundry_foundation::NearZero>::ZERO;
                    }
                    self * self * self
                }
            }
        )*
    };
}

impl_powers_snapping!(f32, f64, Decimal);
