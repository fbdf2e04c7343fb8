//! Signed-magnitude binary codec.
//!
//! An encoding is a sign token (`+` or `-`) followed by the shortest binary
//! representation of the magnitude, so `5` is `+101`, `-10` is `-1010` and zero
//! is `+0`. The sign is never folded into the digits (no two's complement), which
//! is what lets crossover splice a negative parent onto a positive one and land
//! far outside the parents' range.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const POSITIVE: char = '+';
pub const NEGATIVE: char = '-';

/// Errors raised while decoding an encoding back into a decimal value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("InvalidEncoding: expected a sign token followed by binary digits, got {encoding:?}")]
    InvalidEncoding { encoding: String },
    #[error("Overflow: magnitude does not fit a 64 bit integer, got {encoding:?}")]
    Overflow { encoding: String },
}

impl CodecError {
    fn invalid(encoding: &str) -> Self {
        Self::InvalidEncoding {
            encoding: encoding.to_string(),
        }
    }

    fn overflow(encoding: &str) -> Self {
        Self::Overflow {
            encoding: encoding.to_string(),
        }
    }
}

/// A well-formed signed binary string.
///
/// Every `Encoding` starts with a sign token and holds at least one binary digit.
/// Splicing and flipping preserve that shape, so operators can work on encodings
/// without re-validating them. Decoding can still overflow when a splice
/// produces more digits than an `i64` holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Encoding(String);

impl Encoding {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, sign token included.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Takes `self` up to `cut` characters and `other` from `cut` onwards.
    ///
    /// Both sides clamp to their own width, so a cut past the end of `self`
    /// keeps all of `self` and a cut past the end of `other` contributes nothing.
    pub fn splice(&self, other: &Encoding, cut: usize) -> Encoding {
        let head = &self.0[..cut.min(self.width())];
        let tail = &other.0[cut.min(other.width())..];

        Encoding(format!("{head}{tail}"))
    }

    /// Flips the token at `position`.
    ///
    /// Position 0 toggles the sign; any other position toggles a digit. A position
    /// past the end leaves the encoding unchanged.
    pub fn flip(&self, position: usize) -> Encoding {
        let flipped = self
            .0
            .chars()
            .enumerate()
            .map(|(index, token)| {
                if index != position {
                    return token;
                }

                match token {
                    POSITIVE => NEGATIVE,
                    NEGATIVE => POSITIVE,
                    '0' => '1',
                    _ => '0',
                }
            })
            .collect();

        Encoding(flipped)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Encoding {
    type Err = CodecError;

    /// Accepts any well-formed encoding, including non-canonical ones such as
    /// `-0` or `+0011`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)?;

        Ok(Encoding(s.to_string()))
    }
}

/// Encodes a decimal value as a sign token followed by its minimal magnitude bits.
pub fn encode(value: i64) -> Encoding {
    let sign = if value < 0 { NEGATIVE } else { POSITIVE };

    Encoding(format!("{sign}{:b}", value.unsigned_abs()))
}

/// Decodes a signed binary string back into a decimal value.
pub fn decode(encoding: &str) -> Result<i64, CodecError> {
    let mut tokens = encoding.chars();
    let negative = match tokens.next() {
        Some(POSITIVE) => false,
        Some(NEGATIVE) => true,
        _ => return Err(CodecError::invalid(encoding)),
    };

    let digits = tokens.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CodecError::invalid(encoding));
    }

    let magnitude =
        u64::from_str_radix(digits, 2).map_err(|_| CodecError::overflow(encoding))?;

    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };

    value.ok_or_else(|| CodecError::overflow(encoding))
}

/// Decodes a well-formed encoding, saturating magnitudes that do not fit an `i64`
/// to `i64::MIN` or `i64::MAX`.
///
/// Splices and flips near the extremes of the `i64` range can carry more magnitude
/// than the type holds. Saturating keeps such offspring ordered against the
/// bounds, so a clamp still repairs them.
pub fn decode_saturating(encoding: &Encoding) -> i64 {
    let (sign, digits) = encoding.0.split_at(1);

    // Digits are well formed, so parsing only fails on overflow
    let magnitude = u64::from_str_radix(digits, 2).unwrap_or(u64::MAX);

    if sign.starts_with(NEGATIVE) {
        0i64.saturating_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).unwrap_or(i64::MAX)
    }
}

/// Width in characters of the widest encoding in `[lower, upper]`.
///
/// Magnitudes grow monotonically away from zero, so only the endpoints matter.
pub fn bit_width(lower: i64, upper: i64) -> usize {
    encode(lower).width().max(encode(upper).width())
}
