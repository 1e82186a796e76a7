//! Sundry - Small numeric, collection and text helpers
//!
//! This crate re-exports all layers of the Sundry workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: sundry_numeric      - Near-equality, interpolation, clamping, rounding, numerals
//!          sundry_collections  - Map lookups, key-value pairs, extremum, nullable projections
//!          sundry_text         - In-place buffer trimming
//! Layer 0: sundry_foundation   - Error type and numeric capability traits
//! ```

pub use sundry_collections as collections;
pub use sundry_foundation as foundation;
pub use sundry_numeric as numeric;
pub use sundry_text as text;
