//! Numeric helpers for Sundry.
//!
//! This crate provides:
//! - [`compare`] - Near-zero and relative near-equality tests, snapping
//! - [`interpolate`] - Linear interpolation and its inverse
//! - [`clamp`] - Order-independent and saturating clamps
//! - [`power`] - Squares and cubes with zero snapping
//! - [`round`] - Saturating round-to-integer
//! - [`sqrt`] - Newton's-method square root for `Decimal`
//! - [`script`] - Superscript/subscript numerals and digit classification

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clamp;
pub mod compare;
pub mod interpolate;
pub mod power;
pub mod round;
pub mod script;
pub mod sqrt;

pub use clamp::{clamp, clamp_saturating};
pub use compare::{is_nearly_equal, is_nearly_zero, snap_to, snap_to_zero};
pub use interpolate::{inverse_lerp, inverse_lerp_decimal, lerp};
pub use power::Powers;
pub use round::RoundSaturating;
pub use script::{
    DigitFamily, ScriptDigit, ScriptStyle, parse_digit, parse_script_number, render, str_to_subscript,
    str_to_superscript, to_subscript, to_superscript,
};
pub use sqrt::sqrt_decimal;
