//! Text buffer helpers for Sundry.
//!
//! See [`CharBuffer`] for in-place end trimming of `String` and `Vec<char>`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buffer;

pub use buffer::CharBuffer;
