//! Integration tests for lerp and inverse lerp

use proptest::prelude::*;
use sundry_foundation::{Decimal, ErrorKind};
use sundry_numeric::{inverse_lerp, inverse_lerp_decimal, lerp};

// =============================================================================
// Lerp
// =============================================================================

#[test]
fn lerp_does_not_clamp() {
    assert_eq!(lerp(10.0_f64, 20.0, 0.25), 12.5);
    assert_eq!(lerp(10.0_f64, 20.0, 2.0), 30.0);
    assert_eq!(lerp(10.0_f64, 20.0, -1.0), 0.0);
}

#[test]
fn lerp_decimal_is_exact() {
    let mid = lerp(Decimal::new(1, 0), Decimal::new(3, 0), Decimal::new(5, 1));
    assert_eq!(mid, Decimal::new(2, 0));
}

// =============================================================================
// Inverse Lerp
// =============================================================================

#[test]
fn inverse_lerp_regular_interval() {
    assert_eq!(inverse_lerp(0.0_f64, 10.0, 2.5), 0.25);
    assert_eq!(inverse_lerp(10.0_f32, 0.0, 2.5), 0.75);
}

#[test]
fn inverse_lerp_degenerate_interval() {
    assert_eq!(inverse_lerp(5.0_f64, 5.0, 5.0), 0.5);
    assert!(inverse_lerp(5.0_f64, 5.0, 6.0).is_nan());
    assert!(inverse_lerp(5.0_f32, 5.0, 6.0).is_nan());
}

#[test]
fn inverse_lerp_decimal_degenerate_interval() {
    let five = Decimal::new(5, 0);
    assert_eq!(inverse_lerp_decimal(five, five, five).unwrap(), Decimal::new(5, 1));

    let err = inverse_lerp_decimal(five, five, Decimal::new(6, 0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfRange { parameter: "result", .. }));
    assert_eq!(
        err.context.and_then(|c| c.operation),
        Some("inverse_lerp_decimal")
    );
}

#[test]
fn inverse_lerp_decimal_tolerates_rounding_noise() {
    let three = Decimal::from(3);
    let almost_one = Decimal::ONE / three * three;
    let amount = inverse_lerp_decimal(Decimal::ONE, almost_one, Decimal::ONE).unwrap();
    assert_eq!(amount, Decimal::new(5, 1));
}

#[test]
fn inverse_lerp_decimal_regular_interval() {
    let amount =
        inverse_lerp_decimal(Decimal::ZERO, Decimal::new(10, 0), Decimal::new(25, 1)).unwrap();
    assert_eq!(amount, Decimal::new(25, 2));
}

proptest! {
    #[test]
    fn lerp_undoes_inverse_lerp(
        a in -1e3_f64..1e3,
        span in 1.0_f64..1e3,
        x in -1e3_f64..1e3,
    ) {
        let b = a + span;
        let back = lerp(a, b, inverse_lerp(a, b, x));
        prop_assert!((back - x).abs() < 1e-9);
    }
}
