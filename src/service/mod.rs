//! Service layer module.
//!
//! Contains the normalization, checksum, generation and formatting logic.

pub mod checksum;
pub mod formatter;
pub mod generator;
pub mod normalizer;

pub use checksum::{compute_expected_check, validate, validate_str};
pub use formatter::format_thousands;
pub use generator::Generator;
pub use normalizer::normalize;
