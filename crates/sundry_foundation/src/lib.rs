//! Core error type and capability traits for Sundry.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with context
//! - [`NearZero`] / [`FloatSentinel`] - Numeric capabilities used by the
//!   comparison and interpolation helpers
//! - [`SequenceIndex`] - Index widths for the extremum helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capability;
pub mod error;

pub use capability::{FloatSentinel, NearZero, SequenceIndex};
pub use error::{Error, ErrorContext, ErrorKind};

/// Result type for Sundry operations.
pub type Result<T> = std::result::Result<T, Error>;

pub use rust_decimal::Decimal;
