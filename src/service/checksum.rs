//! Modulo-11 checksum.
//!
//! Body digits are weighted right to left with the repeating sequence
//! `2, 3, 4, 5, 6, 7`. With `r = 11 - (sum mod 11)` the check character is
//! `0` for `r = 11`, `K` for `r = 10` and the digit `r` otherwise.

use tracing::debug;

use crate::domain::{CheckDigit, NormalizedRut};
use crate::error::{Result, RutError};

/// Weights applied to body digits, starting from the rightmost one.
pub const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Compute the check character for a digit body.
///
/// No length rule is applied here; any run of digits has a check character.
/// A zero digit still consumes a weight.
///
/// # Errors
///
/// Returns [`RutError::NonDigitBody`] if `body` contains a non-digit.
pub fn compute_expected_check(body: &str) -> Result<CheckDigit> {
    let remainder = body
        .bytes()
        .rev()
        .zip(WEIGHTS.iter().cycle())
        .try_fold(0, |acc, (b, weight)| {
            if b.is_ascii_digit() {
                Ok(accumulate(acc, u32::from(b - b'0'), *weight))
            } else {
                Err(RutError::NonDigitBody)
            }
        })?;

    Ok(CheckDigit::from_mod11(11 - remainder))
}

/// Check character for a numeric body.
#[must_use]
pub fn check_for_number(body: u32) -> CheckDigit {
    // Low digit first, and at least one digit so that 0 maps to '0'.
    let remainder = std::iter::successors(Some(body), |n| (*n >= 10).then_some(n / 10))
        .map(|n| n % 10)
        .zip(WEIGHTS.iter().cycle())
        .fold(0, |acc, (digit, weight)| accumulate(acc, digit, *weight));

    CheckDigit::from_mod11(11 - remainder)
}

/// Verify a normalized identifier's check character.
///
/// Returns the expected check character on success so callers can display
/// it; on mismatch the expected value travels in the error.
///
/// # Errors
///
/// Returns [`RutError::CheckMismatch`] if the check character is wrong, or
/// [`RutError::NonDigitBody`] if the body is not numeric.
pub fn validate(rut: &NormalizedRut) -> Result<CheckDigit> {
    let expected = compute_expected_check(rut.body())?;
    let actual = rut.check();

    if expected != actual {
        debug!(rut = %rut, %expected, %actual, "RUT check character mismatch");
        return Err(RutError::CheckMismatch { expected, actual });
    }

    debug!(rut = %rut, "RUT valid");
    Ok(expected)
}

/// Normalize and validate a raw identifier in one call.
///
/// # Errors
///
/// Returns the first format or checksum error found.
pub fn validate_str(raw: &str) -> Result<CheckDigit> {
    validate(&NormalizedRut::parse(raw)?)
}

/// Add one weighted digit to a running sum kept reduced mod 11.
const fn accumulate(acc: u32, digit: u32, weight: u32) -> u32 {
    (acc + digit * weight) % 11
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(
            compute_expected_check("11111111").unwrap(),
            CheckDigit::Digit(1)
        );
        assert_eq!(
            compute_expected_check("12345678").unwrap(),
            CheckDigit::Digit(5)
        );
        assert_eq!(compute_expected_check("1000005").unwrap(), CheckDigit::K);
        assert_eq!(
            compute_expected_check("9999999").unwrap(),
            CheckDigit::Digit(3)
        );
    }

    #[test]
    fn test_remainder_zero_maps_to_zero() {
        // 4*2 + 1*3 = 11
        assert_eq!(
            compute_expected_check("10000004").unwrap(),
            CheckDigit::Digit(0)
        );
        assert_eq!(compute_expected_check("0").unwrap(), CheckDigit::Digit(0));
    }

    #[test]
    fn test_remainder_one_maps_to_k() {
        // 3*2 + 1*3 + 1*3 = 12
        assert_eq!(compute_expected_check("10000013").unwrap(), CheckDigit::K);
        assert_eq!(compute_expected_check("6").unwrap(), CheckDigit::K);
    }

    #[test]
    fn test_zero_digits_advance_weight() {
        // 1*2 + 0*3 + 1*4 = 6, r = 5. Not advancing on the zero would give r = 6.
        assert_eq!(compute_expected_check("101").unwrap(), CheckDigit::Digit(5));
    }

    #[test]
    fn test_weights_wrap_after_seven() {
        // Seventh digit from the right takes weight 2 again: 1*2 = 2, r = 9.
        assert_eq!(
            compute_expected_check("1000000").unwrap(),
            CheckDigit::Digit(9)
        );
    }

    #[test]
    fn test_non_digit_body() {
        assert_eq!(
            compute_expected_check("12a45678"),
            Err(RutError::NonDigitBody)
        );
    }

    #[test]
    fn test_deterministic() {
        let first = compute_expected_check("7654321").unwrap();
        for _ in 0..10 {
            assert_eq!(compute_expected_check("7654321").unwrap(), first);
        }
        assert_eq!(first, CheckDigit::Digit(6));
    }

    #[test]
    fn test_long_body_reduces_as_it_goes() {
        // Six nines weigh 27 * 9 = 243, which is 1 (mod 11).
        assert_eq!(compute_expected_check(&"9".repeat(6)).unwrap(), CheckDigit::K);

        // 100_000 such blocks: 100_000 mod 11 = 10, r = 1.
        let body = "9".repeat(600_000);
        assert_eq!(compute_expected_check(&body).unwrap(), CheckDigit::Digit(1));
    }

    #[test]
    fn test_check_for_number_matches_string_form() {
        for body in [0, 6, 101, 1_000_005, 10_000_004, 12_345_678, 22_999_999] {
            assert_eq!(
                check_for_number(body),
                compute_expected_check(&body.to_string()).unwrap()
            );
        }
    }

    #[test]
    fn test_validate_str() {
        assert_eq!(validate_str("11111111-1").unwrap(), CheckDigit::Digit(1));
        assert_eq!(validate_str("10.000.013-k").unwrap(), CheckDigit::K);
        assert_eq!(
            validate_str("11111111-2"),
            Err(RutError::CheckMismatch {
                expected: CheckDigit::Digit(1),
                actual: CheckDigit::Digit(2),
            })
        );
    }

    #[test]
    fn test_validate_rejects_every_wrong_check() {
        let all = (0..=9).map(CheckDigit::Digit).chain([CheckDigit::K]);
        for check in all {
            let raw = format!("12345678-{check}");
            let result = validate_str(&raw);
            if check == CheckDigit::Digit(5) {
                assert!(result.is_ok());
            } else {
                assert_eq!(result.unwrap_err().expected(), Some(CheckDigit::Digit(5)));
            }
        }
    }
}
