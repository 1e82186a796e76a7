//! Capability traits shared by the helper crates.
//!
//! Each trait captures a single requirement of a generic helper so that
//! bounds compose (`T: NearZero + Sub<Output = T>`) instead of leaning on a
//! monolithic numeric trait.

use rust_decimal::Decimal;

/// Types that know how small a magnitude must be to count as zero.
pub trait NearZero: Copy + PartialOrd {
    /// Magnitudes strictly below this threshold are treated as zero.
    const NEAR_ZERO: Self;

    /// The additive identity.
    const ZERO: Self;

    /// Returns the absolute value.
    #[must_use]
    fn magnitude(self) -> Self;
}

impl NearZero for f64 {
    const NEAR_ZERO: Self = 1e-15;
    const ZERO: Self = 0.0;

    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }
}

impl NearZero for f32 {
    const NEAR_ZERO: Self = 1e-6;
    const ZERO: Self = 0.0;

    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }
}

impl NearZero for Decimal {
    // 1e-25: a thousand units in the last place at full scale, so rounding
    // noise from division stays nearly equal.
    const NEAR_ZERO: Self = Decimal::from_parts(1, 0, 0, false, 25);
    const ZERO: Self = Decimal::ZERO;

    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }
}

/// Binary floating-point types that carry a not-a-number sentinel.
pub trait FloatSentinel: NearZero {
    /// The not-a-number value.
    const NAN: Self;

    /// One half, the midpoint of a unit interval.
    const HALF: Self;
}

impl FloatSentinel for f64 {
    const NAN: Self = f64::NAN;
    const HALF: Self = 0.5;
}

impl FloatSentinel for f32 {
    const NAN: Self = f32::NAN;
    const HALF: Self = 0.5;
}

/// Signed integer types usable as sequence positions.
///
/// `-1` is the "not found" sentinel, so only signed types qualify.
pub trait SequenceIndex: Copy + Eq + Ord + std::fmt::Debug {
    /// The sentinel for an empty sequence.
    const MINUS_ONE: Self;

    /// The first position.
    const ZERO: Self;

    /// Width of the type in bits.
    const BITS: u32;

    /// Converts a zero-based position, returning `None` if it does not fit.
    fn from_position(position: usize) -> Option<Self>;
}

macro_rules! impl_sequence_index_for {
    ($t:ty) => {
        impl SequenceIndex for $t {
            const MINUS_ONE: Self = -1;
            const ZERO: Self = 0;
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn from_position(position: usize) -> Option<Self> {
                <$t>::try_from(position).ok()
            }
        }
    };
}

impl_sequence_index_for!(i32);
impl_sequence_index_for!(i64);
