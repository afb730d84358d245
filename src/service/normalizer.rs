//! Format normalizer.
//!
//! Turns raw input such as `12.345.678-k` into a [`NormalizedRut`]
//! (`12345678-K`), rejecting anything that does not look like
//! `NNNNNNN-C` or `NNNNNNNN-C`.

use tracing::debug;

use crate::domain::{CheckDigit, GROUPING, MAX_LENGTH, MIN_LENGTH, NormalizedRut, SEPARATOR};
use crate::error::{Result, RutError};

/// Normalize a raw identifier.
///
/// Steps, in order:
/// 1. Remove every `.`.
/// 2. Check the length is within [`MIN_LENGTH`]..=[`MAX_LENGTH`].
/// 3. Require `-` right before the last character.
/// 4. Accept a digit or `K` as check character, upper-casing `k`.
/// 5. Require the body to be all decimal digits.
///
/// The input is left untouched; the normalized value is returned.
///
/// # Errors
///
/// Returns the [`RutError`] of the first step that fails.
pub fn normalize(raw: &str) -> Result<NormalizedRut> {
    let mut value: String = raw.chars().filter(|&c| c != GROUPING).collect();

    // Lengths are in bytes; every accepted character is ASCII.
    let length = value.len();
    if length < MIN_LENGTH {
        debug!(input = raw, length, "RUT too short");
        return Err(RutError::TooShort { length });
    }
    if length > MAX_LENGTH {
        debug!(input = raw, length, "RUT too long");
        return Err(RutError::TooLong { length });
    }

    let bytes = value.as_bytes();
    if bytes[length - 2] != SEPARATOR as u8 {
        debug!(input = raw, "RUT separator missing");
        return Err(RutError::MissingSeparator);
    }

    // The byte before is '-', so the last char is a single byte.
    let Some(last) = value.chars().next_back() else {
        return Err(RutError::TooShort { length });
    };
    let check = CheckDigit::try_from(last).inspect_err(|_| {
        debug!(input = raw, "RUT check character invalid");
    })?;

    if !value[..length - 2].bytes().all(|b| b.is_ascii_digit()) {
        debug!(input = raw, "RUT body has non-digit characters");
        return Err(RutError::NonDigitBody);
    }

    if check == CheckDigit::K {
        value.replace_range(length - 1.., "K");
    }

    Ok(NormalizedRut::from_parts(value, check))
}
