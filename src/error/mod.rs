//! Error handling module.
//!
//! [`RutError`] covers everything that can go wrong while normalizing or
//! validating an identifier. [`AppError`] wraps it, together with
//! configuration and output failures, for the command-line front end.

pub mod codes;

use crate::domain::CheckDigit;

pub use codes::{ErrorCategory, ErrorCode};

/// Validation error for a single identifier.
///
/// Every variant is terminal for the call: nothing is retried and no
/// partially normalized value is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RutError {
    /// Fewer characters than `NNNNNNN-N` once grouping dots are removed.
    #[error("length {length} is less than the minimum of {min}", min = crate::domain::MIN_LENGTH)]
    TooShort {
        /// Length after removing grouping dots.
        length: usize,
    },

    /// More characters than `NNNNNNNN-N` once grouping dots are removed.
    #[error("length {length} exceeds the maximum of {max}", max = crate::domain::MAX_LENGTH)]
    TooLong {
        /// Length after removing grouping dots.
        length: usize,
    },

    /// The character before the check character is not `-`.
    #[error("missing '-' separator before the check character")]
    MissingSeparator,

    /// The check character is neither a digit nor `K`.
    #[error("expected a digit or 'K' as check character, found {0:?}")]
    InvalidCheckChar(char),

    /// The body contains something other than decimal digits.
    #[error("body must contain only digits")]
    NonDigitBody,

    /// Well-formed identifier whose check character does not match.
    #[error("invalid check character '{actual}', expected '{expected}'")]
    CheckMismatch {
        /// Check character computed from the body.
        expected: CheckDigit,
        /// Check character found in the input.
        actual: CheckDigit,
    },
}

impl RutError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::TooShort { .. } => ErrorCode::TOO_SHORT,
            Self::TooLong { .. } => ErrorCode::TOO_LONG,
            Self::MissingSeparator => ErrorCode::MISSING_SEPARATOR,
            Self::InvalidCheckChar(_) => ErrorCode::INVALID_CHECK_CHAR,
            Self::NonDigitBody => ErrorCode::NON_DIGIT_BODY,
            Self::CheckMismatch { .. } => ErrorCode::CHECK_MISMATCH,
        }
    }

    /// Expected check character, when the failure was a checksum mismatch.
    #[must_use]
    pub const fn expected(&self) -> Option<CheckDigit> {
        match self {
            Self::CheckMismatch { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}

/// Application-level error type for the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] config::ConfigError),

    /// An identifier failed validation.
    #[error("Invalid RUT {input:?}: {source}")]
    Rut {
        /// Input as given by the user.
        input: String,
        /// Underlying validation error.
        #[source]
        source: RutError,
    },

    /// Output could not be produced.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfig(_) => ErrorCode::INVALID_CONFIG,
            Self::Rut { source, .. } => source.error_code(),
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type alias using `RutError`.
pub type Result<T> = std::result::Result<T, RutError>;

/// Result type alias using `AppError`.
pub type AppResult<T> = std::result::Result<T, AppError>;
