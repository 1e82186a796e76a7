//! Collection helpers for Sundry.
//!
//! This crate provides:
//! - [`dictionary`] - Map lookups with a fallback value
//! - [`pair`] - [`KeyValuePair`], an owned key/value record
//! - [`extremum`] - Index of the first maximal or minimal element
//! - [`select`] - Lazy projections that drop absent results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dictionary;
pub mod extremum;
pub mod pair;
pub mod select;

pub use dictionary::MapLookup;
pub use extremum::ExtremumExt;
pub use pair::KeyValuePair;
pub use select::{
    NonNull, SelectExt, SelectManyNonNull, SelectManyNonNullIndexed, SelectNonNull,
    SelectNonNullIndexed,
};
