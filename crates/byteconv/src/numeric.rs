//! Arbitrary-precision rendering of the numeric views.

use devsuite_buffers::HexCase;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::views::Field;

/// One of the three bases the numeric views render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericBase {
    Decimal,
    Binary,
    Hex,
}

impl NumericBase {
    pub const ALL: [NumericBase; 3] = [NumericBase::Decimal, NumericBase::Binary, NumericBase::Hex];

    pub fn radix(self) -> u32 {
        match self {
            NumericBase::Decimal => 10,
            NumericBase::Binary => 2,
            NumericBase::Hex => 16,
        }
    }

    /// Short label used in history summaries (`Dec: 255`).
    pub fn prefix(self) -> &'static str {
        match self {
            NumericBase::Decimal => "Dec",
            NumericBase::Binary => "Bin",
            NumericBase::Hex => "Hex",
        }
    }

    pub fn field(self) -> Field {
        match self {
            NumericBase::Decimal => Field::Decimal,
            NumericBase::Binary => Field::BinaryNum,
            NumericBase::Hex => Field::HexNum,
        }
    }

    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.radix())
    }

    fn invalid_digits(self) -> FieldError {
        match self {
            NumericBase::Decimal => FieldError::NonDecimalDigits,
            NumericBase::Binary => FieldError::InvalidBinaryDigits,
            NumericBase::Hex => FieldError::InvalidHexDigits,
        }
    }
}

/// Parses a non-negative integer. Surrounding whitespace is ignored; anything
/// else outside the base's digit alphabet is rejected, including signs and
/// `0x`/`0b` prefixes.
pub fn parse_unsigned(raw: &str, base: NumericBase) -> Result<BigUint, FieldError> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.chars().all(|c| base.is_digit(c)) {
        return Err(base.invalid_digits());
    }
    BigUint::parse_bytes(digits.as_bytes(), base.radix()).ok_or(FieldError::ValueTooLarge)
}

pub fn render(value: &BigUint, base: NumericBase, case: HexCase) -> String {
    let digits = value.to_str_radix(base.radix());
    match base {
        NumericBase::Hex => case.apply(digits),
        _ => digits,
    }
}

/// Big-endian unsigned interpretation of the whole sequence. An empty
/// sequence has no numeric value.
pub fn from_be_bytes(bytes: &[u8]) -> Option<BigUint> {
    (!bytes.is_empty()).then(|| BigUint::from_bytes_be(bytes))
}
