//! Identifier types.
//!
//! Validation happens in two phases, each with its own type:
//!
//! 1. [`NormalizedRut`]: grouping dots removed, check character upper-cased,
//!    length and separator checked. The checksum is not verified yet.
//! 2. [`Rut`]: the checksum matched. Only this type can be rendered with
//!    [`Rut::decimal_format`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{CheckDigit, MAX_LENGTH, MIN_LENGTH, SEPARATOR};
use crate::error::{Result, RutError};
use crate::service::{checksum, formatter, normalizer};

/// An identifier that passed format normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedRut {
    /// `BODY-C` with no grouping dots and an upper-case check character.
    value: String,
    check: CheckDigit,
}

impl NormalizedRut {
    /// Build from already-normalized parts.
    pub(crate) const fn from_parts(value: String, check: CheckDigit) -> Self {
        Self { value, check }
    }

    /// Normalize a raw identifier. See [`normalizer::normalize`].
    ///
    /// # Errors
    ///
    /// Returns a format error if the input is malformed.
    pub fn parse(raw: &str) -> Result<Self> {
        normalizer::normalize(raw)
    }

    /// The digit body, without separator or check character.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.value[..self.value.len() - 2]
    }

    /// The supplied check character.
    #[must_use]
    pub const fn check(&self) -> CheckDigit {
        self.check
    }

    /// The normalized string, `BODY-C`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Verify the checksum, returning the expected check character.
    ///
    /// # Errors
    ///
    /// Returns [`RutError::CheckMismatch`] if the check character is wrong.
    pub fn validate(&self) -> Result<CheckDigit> {
        checksum::validate(self)
    }
}

impl std::fmt::Display for NormalizedRut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A validated RUT.
///
/// Constructed by parsing (which runs both validation phases) or by the
/// generator, so the body is always numeric and the check character always
/// matches it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rut(NormalizedRut);

impl Rut {
    /// Parse and validate a raw identifier such as `11.111.111-1`.
    ///
    /// # Errors
    ///
    /// Returns the first format or checksum error found.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::try_from(normalizer::normalize(raw)?)
    }

    /// Assemble from a numeric body, computing the check character.
    ///
    /// # Errors
    ///
    /// Returns [`RutError::TooShort`] or [`RutError::TooLong`] if the body
    /// is not 7 or 8 digits long.
    pub fn from_body(body: u32) -> Result<Self> {
        let rut = Self::assemble(body);
        let length = rut.as_str().len();
        if length < MIN_LENGTH {
            return Err(RutError::TooShort { length });
        }
        if length > MAX_LENGTH {
            return Err(RutError::TooLong { length });
        }
        Ok(rut)
    }

    /// Assemble without the length check; callers keep `body` in
    /// `1_000_000..100_000_000`.
    pub(crate) fn assemble(body: u32) -> Self {
        let check = checksum::check_for_number(body);
        let value = format!("{body}{SEPARATOR}{check}");
        Self(NormalizedRut::from_parts(value, check))
    }

    /// The digit body.
    #[must_use]
    pub fn body(&self) -> &str {
        self.0.body()
    }

    /// The check character.
    #[must_use]
    pub const fn check(&self) -> CheckDigit {
        self.0.check()
    }

    /// The normalized string, `BODY-C`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Numeric value of the body.
    #[must_use]
    pub fn number(&self) -> u32 {
        // At most 8 ASCII digits, checked during normalization.
        self.body()
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    /// Render with `.` thousands separators, e.g. `11.111.111-1`.
    ///
    /// The body is rendered as a number, so leading zeros are dropped.
    #[must_use]
    pub fn decimal_format(&self) -> String {
        format!(
            "{}{SEPARATOR}{}",
            formatter::format_thousands(u64::from(self.number())),
            self.check()
        )
    }
}

impl TryFrom<NormalizedRut> for Rut {
    type Error = RutError;

    fn try_from(normalized: NormalizedRut) -> Result<Self> {
        normalized.validate()?;
        Ok(Self(normalized))
    }
}

impl TryFrom<&str> for Rut {
    type Error = RutError;

    fn try_from(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for Rut {
    type Error = RutError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Rut> for String {
    fn from(rut: Rut) -> Self {
        rut.0.value
    }
}

impl AsRef<str> for Rut {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_parts() {
        let rut = NormalizedRut::parse("12.345.678-k").unwrap();
        assert_eq!(rut.as_str(), "12345678-K");
        assert_eq!(rut.body(), "12345678");
        assert_eq!(rut.check(), CheckDigit::K);
    }

    #[test]
    fn test_parse_valid() {
        let rut: Rut = "11.111.111-1".parse().unwrap();
        assert_eq!(rut.as_str(), "11111111-1");
        assert_eq!(rut.number(), 11_111_111);
        assert_eq!(rut.to_string(), "11111111-1");
    }

    #[test]
    fn test_parse_mismatch() {
        let err = Rut::parse("12345678-4").unwrap_err();
        assert_eq!(
            err,
            RutError::CheckMismatch {
                expected: CheckDigit::Digit(5),
                actual: CheckDigit::Digit(4),
            }
        );
    }

    #[test]
    fn test_from_body() {
        let rut = Rut::from_body(10_000_013).unwrap();
        assert_eq!(rut.as_str(), "10000013-K");
        assert_eq!(Rut::parse(rut.as_str()).unwrap(), rut);

        let shortest = Rut::from_body(1_000_000).unwrap();
        assert_eq!(Rut::parse(shortest.as_str()).unwrap(), shortest);
    }

    #[test]
    fn test_from_body_rejects_out_of_range() {
        assert_eq!(Rut::from_body(824), Err(RutError::TooShort { length: 5 }));
        assert_eq!(
            Rut::from_body(999_999),
            Err(RutError::TooShort { length: 8 })
        );
        assert_eq!(
            Rut::from_body(123_456_789),
            Err(RutError::TooLong { length: 11 })
        );
    }

    #[test]
    fn test_decimal_format() {
        assert_eq!(
            Rut::parse("11111111-1").unwrap().decimal_format(),
            "11.111.111-1"
        );
        assert_eq!(
            Rut::parse("1000005-k").unwrap().decimal_format(),
            "1.000.005-K"
        );
    }

    #[test]
    fn test_decimal_format_round_trip() {
        let grouped = "12.345.678-5";
        assert_eq!(Rut::parse(grouped).unwrap().decimal_format(), grouped);
    }

    #[test]
    fn test_serde() {
        let rut = Rut::parse("11.111.111-1").unwrap();
        assert_eq!(serde_json::to_string(&rut).unwrap(), "\"11111111-1\"");

        let parsed: Rut = serde_json::from_str("\"12.345.678-5\"").unwrap();
        assert_eq!(parsed.as_str(), "12345678-5");

        assert!(serde_json::from_str::<Rut>("\"12345678-4\"").is_err());
    }
}
