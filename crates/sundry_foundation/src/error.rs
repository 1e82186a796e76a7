//! Error types for the Sundry helpers.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Expected absence (a missing key, an empty sequence) is never an error;
//! only argument validation and numeric domain failures end up here.

use std::fmt;

use thiserror::Error;

/// The main error type for Sundry operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            parameter,
            reason: reason.into(),
        })
    }

    /// Creates an out-of-range error.
    #[must_use]
    pub fn out_of_range(
        parameter: &'static str,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::OutOfRange {
            parameter,
            value: value.to_string(),
            reason: reason.into(),
        })
    }

    /// Creates an index overflow error for an index type of `width` bits.
    #[must_use]
    pub fn index_overflow(width: u32) -> Self {
        Self::new(ErrorKind::IndexOverflow { width })
    }

    /// Creates an arithmetic overflow error.
    #[must_use]
    pub fn arithmetic_overflow(operation: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArithmeticOverflow(operation.into()))
    }

    /// Returns the offending parameter name, if the error names one.
    #[must_use]
    pub fn parameter(&self) -> Option<&'static str> {
        match &self.kind {
            ErrorKind::InvalidArgument { parameter, .. }
            | ErrorKind::OutOfRange { parameter, .. } => Some(parameter),
            ErrorKind::IndexOverflow { .. } | ErrorKind::ArithmeticOverflow(_) => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A required argument was malformed and the operation cannot proceed.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// An argument lies outside the operation's domain.
    #[error("argument `{parameter}` out of range ({value}): {reason}")]
    OutOfRange {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// Why the value is outside the domain.
        reason: String,
    },

    /// The sequence is longer than the requested index type can address.
    #[error("sequence index does not fit in {width} bits")]
    IndexOverflow {
        /// Width of the index type in bits.
        width: u32,
    },

    /// Arithmetic on a fixed-precision type overflowed.
    #[error("arithmetic overflow in {0}")]
    ArithmeticOverflow(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that raised the error.
    pub operation: Option<&'static str>,
    /// Free-form notes, innermost first.
    pub notes: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Adds a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}
