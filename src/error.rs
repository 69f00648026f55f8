/*
    Errors
*/

use thiserror::Error;

use crate::text::ParseError;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type.
///
/// Every fallible operation on a `RealVector` or `Fraction` reports
/// exactly one of these kinds, so callers can tell an indexing mistake
/// from a bad operand or from malformed text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of range for vector of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Ways an operand can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("vectors must have the same size ({left} != {right})")]
    SizeMismatch { left: usize, right: usize },

    #[error("denominator cannot be zero")]
    ZeroDenominator,

    #[error("cannot divide by a zero-valued fraction")]
    DivisionByZero,

    #[error("reduced fraction does not fit in 64-bit integers")]
    Overflow,
}

impl Error {
    /// Returns true if this `Error` is an out-of-range index.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }

    /// Returns true if this `Error` is an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns true if this `Error` came from malformed text.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}
