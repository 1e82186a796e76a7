//! Integration tests for near-zero and near-equal comparisons

use sundry_foundation::Decimal;
use sundry_numeric::{is_nearly_equal, is_nearly_zero, snap_to, snap_to_zero};

// =============================================================================
// Near Zero
// =============================================================================

#[test]
fn nearly_zero_thresholds() {
    assert!(is_nearly_zero(1e-20_f64));
    assert!(is_nearly_zero(-1e-16_f64));
    assert!(!is_nearly_zero(1e-3_f64));
    assert!(is_nearly_zero(1e-7_f32));
    assert!(!is_nearly_zero(1e-5_f32));
    assert!(is_nearly_zero(Decimal::ZERO));
    assert!(is_nearly_zero(Decimal::new(1, 28)));
    assert!(!is_nearly_zero(Decimal::new(1, 24)));
}

#[test]
fn snap_to_zero_only_snaps_tiny_values() {
    assert_eq!(snap_to_zero(1e-20_f64), 0.0);
    assert_eq!(snap_to_zero(0.5_f64), 0.5);
    assert_eq!(snap_to_zero(-2.0_f32), -2.0);
}

// =============================================================================
// Near Equal
// =============================================================================

#[test]
fn nearly_equal_is_relative() {
    assert!(is_nearly_equal(1e20_f64, 1e20 + 65_536.0));
    assert!(!is_nearly_equal(1.0_f64, 1.001));
    assert!(!is_nearly_equal(1e-3_f64, 2e-3));
}

#[test]
fn nearly_equal_rejects_opposite_signs() {
    assert!(!is_nearly_equal(-1e-20_f64, 1e-20));
    assert!(!is_nearly_equal(Decimal::MIN, Decimal::MAX));
}

#[test]
fn nearly_equal_nan_is_never_equal() {
    assert!(!is_nearly_equal(f64::NAN, f64::NAN));
    assert!(!is_nearly_equal(f64::NAN, 0.0));
}

#[test]
fn nearly_equal_decimal() {
    let a = Decimal::new(12_345, 2);
    assert!(is_nearly_equal(a, a));
    assert!(!is_nearly_equal(a, Decimal::new(12_346, 2)));
}

#[test]
fn snap_to_target() {
    assert_eq!(snap_to(1e20_f64 + 65_536.0, 1e20), 1e20);
    assert_eq!(snap_to(2.0_f64, 3.0), 2.0);
}
