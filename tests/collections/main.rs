//! Integration tests for Layer 1: Collections
//!
//! Tests for map lookups, key-value pairs, extremum searches, and nullable
//! projections.

mod dictionary;
mod extremum;
