//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Format errors (length, separator, characters)
//! - 2xxx: Checksum errors
//! - 3xxx: Configuration errors
//! - 5xxx: Internal/System errors

use serde::Serialize;

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Format Errors (1xxx) =====

    /// Input shorter than the minimum accepted length.
    pub const TOO_SHORT: Self = Self(1001);

    /// Input longer than the maximum accepted length.
    pub const TOO_LONG: Self = Self(1002);

    /// No `-` right before the check character.
    pub const MISSING_SEPARATOR: Self = Self(1003);

    /// Check character is neither a digit nor `K`.
    pub const INVALID_CHECK_CHAR: Self = Self(1004);

    /// Body contains something other than digits.
    pub const NON_DIGIT_BODY: Self = Self(1005);

    // ===== Checksum Errors (2xxx) =====

    /// Supplied check character differs from the computed one.
    pub const CHECK_MISMATCH: Self = Self(2001);

    // ===== Configuration Errors (3xxx) =====

    /// Invalid configuration parameters.
    pub const INVALID_CONFIG: Self = Self(3001);

    // ===== Internal/System Errors (5xxx) =====

    /// Output could not be written or serialized.
    pub const INTERNAL_ERROR: Self = Self(5001);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Format,
            2000..=2999 => ErrorCategory::Checksum,
            3000..=3999 => ErrorCategory::Configuration,
            5000..=5999 => ErrorCategory::Internal,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Malformed input (1xxx).
    Format,
    /// Well-formed input with a wrong check character (2xxx).
    Checksum,
    /// Configuration errors (3xxx).
    Configuration,
    /// Internal/system errors (5xxx).
    Internal,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format => write!(f, "format"),
            Self::Checksum => write!(f, "checksum"),
            Self::Configuration => write!(f, "configuration"),
            Self::Internal => write!(f, "internal"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
