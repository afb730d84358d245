//! Check character type.

use serde::{Deserialize, Serialize};

use crate::error::RutError;

/// Trailing check character of a RUT: a decimal digit or `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum CheckDigit {
    /// A decimal digit. Values above 9 are not check characters; they
    /// render as `U+FFFD` and never compare equal to a computed check.
    Digit(u8),
    /// The letter `K`, standing for a remainder value of 10.
    K,
}

impl CheckDigit {
    /// Map `11 - (sum mod 11)` to its check character.
    ///
    /// `11` maps to `0` and `10` to `K`; `value` must be in `1..=11`.
    #[must_use]
    pub(crate) const fn from_mod11(value: u32) -> Self {
        match value {
            11 => Self::Digit(0),
            10 => Self::K,
            #[allow(clippy::cast_possible_truncation)]
            n => Self::Digit(n as u8),
        }
    }

    /// Render as a character (`'0'..='9'` or `'K'`).
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => {
                char::from_digit(u32::from(d), 10).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            Self::K => 'K',
        }
    }
}

impl TryFrom<char> for CheckDigit {
    type Error = RutError;

    /// Accepts digits and either case of `k`.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' => Ok(Self::Digit(c as u8 - b'0')),
            'k' | 'K' => Ok(Self::K),
            other => Err(RutError::InvalidCheckChar(other)),
        }
    }
}

impl From<CheckDigit> for char {
    fn from(check: CheckDigit) -> Self {
        check.as_char()
    }
}

impl std::fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
