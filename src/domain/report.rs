//! Serializable validation outcome.

use serde::Serialize;

use crate::domain::{CheckDigit, NormalizedRut};
use crate::error::{ErrorCategory, RutError};

/// Result of validating one input, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Input exactly as given.
    pub input: String,

    /// Normalized form, if the input passed format checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,

    /// Whether the identifier is valid.
    pub valid: bool,

    /// Check character computed from the body, if it could be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<CheckDigit>,

    /// Numeric error code on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,

    /// Error category on failure: `format` or `checksum`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,

    /// Error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationReport {
    /// Run both validation phases on `input` and record the outcome.
    #[must_use]
    pub fn check(input: &str) -> Self {
        let normalized = match NormalizedRut::parse(input) {
            Ok(normalized) => normalized,
            Err(err) => return Self::failure(input, None, &err),
        };

        match normalized.validate() {
            Ok(expected) => Self {
                input: input.to_string(),
                normalized: Some(normalized.to_string()),
                valid: true,
                expected: Some(expected),
                error_code: None,
                category: None,
                message: None,
            },
            Err(err) => Self::failure(input, Some(normalized.to_string()), &err),
        }
    }

    fn failure(input: &str, normalized: Option<String>, err: &RutError) -> Self {
        let code = err.error_code();
        Self {
            input: input.to_string(),
            normalized,
            valid: false,
            expected: err.expected(),
            error_code: Some(code.as_i32()),
            category: Some(code.category()),
            message: Some(err.to_string()),
        }
    }
}
