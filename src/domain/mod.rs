//! Domain models for RUT handling.
//!
//! This module contains the identifier types, the check character and the
//! serializable validation report, plus the format constants they share.

pub mod check_digit;
pub mod report;
pub mod rut;

pub use check_digit::CheckDigit;
pub use report::ValidationReport;
pub use rut::{NormalizedRut, Rut};

/// Separator between body and check character.
pub const SEPARATOR: char = '-';

/// Thousands separator accepted on input and produced by decimal formatting.
pub const GROUPING: char = '.';

/// Minimum length without grouping dots: `NNNNNNN-N`.
///
/// Bodies shorter than 7 digits are rejected by policy.
pub const MIN_LENGTH: usize = 9;

/// Maximum length without grouping dots: `NNNNNNNN-N`.
pub const MAX_LENGTH: usize = 10;
