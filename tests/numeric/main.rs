//! Integration tests for Layer 1: Numeric
//!
//! Tests for comparison, interpolation, conversions, square root, and
//! script numerals.

mod compare;
mod interpolate;
