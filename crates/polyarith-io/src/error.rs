//! Errors raised while reading term streams.

use thiserror::Error;

/// Errors that can occur while reading a polynomial.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A line ended before the coefficient or the degree.
    #[error("line {line}: missing {expected}")]
    MissingToken {
        /// Offending line.
        line: usize,
        /// Name of the absent token.
        expected: &'static str,
    },

    /// The coefficient is not a finite number.
    #[error("line {line}: invalid coefficient `{token}`")]
    InvalidCoefficient {
        /// Offending line.
        line: usize,
        /// Text that failed to parse.
        token: String,
    },

    /// The degree is not a non-negative integer within `u32`.
    #[error("line {line}: invalid degree `{token}`")]
    InvalidDegree {
        /// Offending line.
        line: usize,
        /// Text that failed to parse.
        token: String,
    },

    /// Input follows the degree on the same line.
    #[error("line {line}: unexpected trailing token `{token}`")]
    TrailingToken {
        /// Offending line.
        line: usize,
        /// First extra token.
        token: String,
    },

    /// A degree is not strictly below the one on the previous term line.
    #[error("line {line}: degree {degree} does not descend below {previous}")]
    OutOfOrder {
        /// Offending line.
        line: usize,
        /// Degree read on this line.
        degree: u32,
        /// Degree of the previous term line.
        previous: u32,
    },
}

impl ReadError {
    /// Returns the offending line number, if the error is tied to one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            ReadError::Io(_) => None,
            ReadError::MissingToken { line, .. }
            | ReadError::InvalidCoefficient { line, .. }
            | ReadError::InvalidDegree { line, .. }
            | ReadError::TrailingToken { line, .. }
            | ReadError::OutOfOrder { line, .. } => Some(*line),
        }
    }
}
