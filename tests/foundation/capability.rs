//! Integration tests for the capability traits
//!
//! Tests near-zero thresholds, float sentinels, and index widths.

use sundry_foundation::{Decimal, FloatSentinel, NearZero, SequenceIndex};

// =============================================================================
// NearZero
// =============================================================================

#[test]
fn near_zero_thresholds() {
    assert!((<f64 as NearZero>::NEAR_ZERO - 1e-15).abs() < f64::EPSILON);
    assert!((<f32 as NearZero>::NEAR_ZERO - 1e-6).abs() < f32::EPSILON);
    assert_eq!(<Decimal as NearZero>::NEAR_ZERO, Decimal::new(1, 25));
}

#[test]
fn decimal_threshold_spans_rounding_noise() {
    let threshold = <Decimal as NearZero>::NEAR_ZERO;
    let last_place = Decimal::new(1, 28);
    assert!(last_place < threshold);
    assert_eq!(threshold.scale(), 25);
    assert_eq!(threshold.mantissa(), 1);
}

#[test]
fn magnitude_is_absolute_value() {
    assert!((-3.5_f64).magnitude() > 3.4);
    assert_eq!(Decimal::new(-125, 2).magnitude(), Decimal::new(125, 2));
    assert_eq!(<f32 as NearZero>::ZERO.magnitude(), 0.0);
}

// =============================================================================
// FloatSentinel
// =============================================================================

#[test]
fn float_sentinels() {
    assert!(<f64 as FloatSentinel>::NAN.is_nan());
    assert!(<f32 as FloatSentinel>::NAN.is_nan());
    assert!((<f64 as FloatSentinel>::HALF - 0.5).abs() < f64::EPSILON);
    assert!((<f32 as FloatSentinel>::HALF - 0.5).abs() < f32::EPSILON);
}

// =============================================================================
// SequenceIndex
// =============================================================================

#[test]
fn sequence_index_constants() {
    assert_eq!(<i32 as SequenceIndex>::MINUS_ONE, -1);
    assert_eq!(<i64 as SequenceIndex>::MINUS_ONE, -1);
    assert_eq!(<i32 as SequenceIndex>::ZERO, 0);
    assert_eq!(<i32 as SequenceIndex>::BITS, 32);
    assert_eq!(<i64 as SequenceIndex>::BITS, 64);
}

#[test]
fn sequence_index_conversion() {
    assert_eq!(i32::from_position(7), Some(7));
    assert_eq!(i32::from_position(i32::MAX as usize), Some(i32::MAX));
    assert_eq!(i32::from_position(i32::MAX as usize + 1), None);
    assert_eq!(i64::from_position(1 << 40), Some(1 << 40));
}
