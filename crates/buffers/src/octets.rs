//! Hex-pair and binary-octet stream formats.

use crate::OctetError;

/// Letter case for rendered hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

impl HexCase {
    pub fn from_upper(upper: bool) -> Self {
        if upper {
            HexCase::Upper
        } else {
            HexCase::Lower
        }
    }

    /// Applies this case to an already rendered hex string.
    pub fn apply(self, hex: String) -> String {
        match self {
            HexCase::Upper => hex.to_ascii_uppercase(),
            HexCase::Lower => hex.to_ascii_lowercase(),
        }
    }
}

/// Renders one zero-padded hex pair per byte, separated by single spaces.
///
/// ```
/// use devsuite_buffers::{hex_octets, HexCase};
///
/// assert_eq!(hex_octets(&[0x0a, 0xff], HexCase::Upper), "0A FF");
/// assert_eq!(hex_octets(&[0x0a, 0xff], HexCase::Lower), "0a ff");
/// ```
pub fn hex_octets(bytes: &[u8], case: HexCase) -> String {
    let pairs: Vec<String> = match case {
        HexCase::Upper => bytes.iter().map(|b| format!("{b:02X}")).collect(),
        HexCase::Lower => bytes.iter().map(|b| format!("{b:02x}")).collect(),
    };
    pairs.join(" ")
}

/// Renders one zero-padded 8-bit group per byte, separated by single spaces.
pub fn binary_octets(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a hex byte stream. Whitespace anywhere is ignored, so both
/// `"48 69"` and `"4869"` give `[0x48, 0x69]`.
pub fn parse_hex_octets(raw: &str) -> Result<Vec<u8>, OctetError> {
    parse_octets(raw, 16, 2)
}

/// Parses a binary byte stream of 8-digit groups. Whitespace is ignored.
pub fn parse_binary_octets(raw: &str) -> Result<Vec<u8>, OctetError> {
    parse_octets(raw, 2, 8)
}

fn parse_octets(raw: &str, radix: u32, group: usize) -> Result<Vec<u8>, OctetError> {
    let mut digits = Vec::with_capacity(raw.len());
    for c in raw.chars().filter(|c| !c.is_whitespace()) {
        match c.to_digit(radix) {
            Some(d) => digits.push(d as u8),
            None => return Err(OctetError::InvalidDigit { radix, found: c }),
        }
    }

    if digits.len() % group != 0 {
        return Err(OctetError::IncompleteByte {
            digits: digits.len(),
            group,
        });
    }

    let bits_per_digit = radix.trailing_zeros();
    Ok(digits
        .chunks_exact(group)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &d| (acc << bits_per_digit) | d))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_empty() {
        assert_eq!(hex_octets(&[], HexCase::Upper), "");
        assert_eq!(binary_octets(&[]), "");
    }

    #[test]
    fn renders_binary_groups() {
        assert_eq!(binary_octets(&[0x00, 0x01, 0xff]), "00000000 00000001 11111111");
    }

    #[test]
    fn parses_hex_with_mixed_whitespace() {
        assert_eq!(parse_hex_octets("4869").unwrap(), vec![0x48, 0x69]);
        assert_eq!(parse_hex_octets(" 48\n6 9\t").unwrap(), vec![0x48, 0x69]);
        assert_eq!(parse_hex_octets("ff aB").unwrap(), vec![0xff, 0xab]);
        assert_eq!(parse_hex_octets("   ").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_foreign_digits_before_grouping() {
        assert_eq!(
            parse_hex_octets("ZZ"),
            Err(OctetError::InvalidDigit { radix: 16, found: 'Z' })
        );
        assert_eq!(
            parse_hex_octets("ABZ"),
            Err(OctetError::InvalidDigit { radix: 16, found: 'Z' })
        );
        assert_eq!(
            parse_binary_octets("0102"),
            Err(OctetError::InvalidDigit { radix: 2, found: '2' })
        );
    }

    #[test]
    fn reports_incomplete_bytes() {
        assert_eq!(
            parse_hex_octets("ABC"),
            Err(OctetError::IncompleteByte { digits: 3, group: 2 })
        );
        assert_eq!(
            parse_binary_octets("1010"),
            Err(OctetError::IncompleteByte { digits: 4, group: 8 })
        );
    }

    #[test]
    fn parses_binary_groups() {
        assert_eq!(
            parse_binary_octets("01001000 01101001").unwrap(),
            vec![0x48, 0x69]
        );
    }
}
