//! Factory for base64 decoders with custom alphabets.

use crate::constants::{ALPHABET, INVALID, MAX_PAD, PAD};
use crate::Base64Error;

/// Creates a base64 decoder for the given alphabet.
///
/// * `chars` - 64-character alphabet. Defaults to the standard alphabet.
/// * `no_padding` - when `true` the input may omit trailing `=`; missing
///   padding is restored before decoding.
///
/// The decoder rejects characters outside the alphabet, padding anywhere but
/// the end, more than two padding characters and lengths that are not a
/// multiple of 4. Non-zero bits in the final partial sextet are ignored.
///
/// # Example
///
/// ```
/// use devsuite_base64::create_from_base64;
///
/// let decode = create_from_base64(None, false).unwrap();
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
/// assert!(decode("aGVsbG8").is_err());
///
/// let lenient = create_from_base64(None, true).unwrap();
/// assert_eq!(lenient("aGVsbG8").unwrap(), b"hello");
/// ```
pub fn create_from_base64(
    chars: Option<&str>,
    no_padding: bool,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base64Error>, Base64Error> {
    let chars = chars.unwrap_or(ALPHABET);
    if chars.chars().count() != 64 || !chars.is_ascii() {
        return Err(Base64Error::InvalidCharSetLength);
    }

    let mut table = [INVALID; 256];
    for (i, b) in chars.bytes().enumerate() {
        table[b as usize] = i as u8;
    }

    Ok(move |encoded: &str| decode(&table, no_padding, encoded))
}

fn decode(table: &[u8; 256], no_padding: bool, encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let input = encoded.as_bytes();
    let missing = (4 - input.len() % 4) % 4;
    if missing != 0 && !no_padding {
        return Err(Base64Error::InvalidLength);
    }
    if missing > MAX_PAD {
        return Err(Base64Error::InvalidLength);
    }

    let pad = PAD as u8;
    let padding = input.iter().rev().take_while(|&&b| b == pad).count();
    if padding + missing > MAX_PAD {
        return Err(Base64Error::InvalidPadding);
    }
    let body = &input[..input.len() - padding];

    let mut out = Vec::with_capacity(body.len() * 3 / 4);
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for (offset, &b) in body.iter().enumerate() {
        let v = table[b as usize];
        if v == INVALID {
            return Err(Base64Error::InvalidCharacter(offset));
        }
        acc = (acc << 6) | u32::from(v);
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rfc4648_vectors() {
        let decode = create_from_base64(None, false).unwrap();
        assert_eq!(decode("").unwrap(), b"");
        assert_eq!(decode("Zg==").unwrap(), b"f");
        assert_eq!(decode("Zm8=").unwrap(), b"fo");
        assert_eq!(decode("Zm9v").unwrap(), b"foo");
        assert_eq!(decode("Zm9vYmFy").unwrap(), b"foobar");
    }

    #[test]
    fn rejects_malformed_input() {
        let decode = create_from_base64(None, false).unwrap();
        assert_eq!(decode("Zg="), Err(Base64Error::InvalidLength));
        assert_eq!(decode("Z==="), Err(Base64Error::InvalidPadding));
        assert_eq!(decode("===="), Err(Base64Error::InvalidPadding));
        assert_eq!(decode("Zg=g"), Err(Base64Error::InvalidCharacter(2)));
        assert_eq!(decode("Zm 9"), Err(Base64Error::InvalidCharacter(2)));
    }

    #[test]
    fn tolerates_trailing_bits() {
        let decode = create_from_base64(None, false).unwrap();
        assert_eq!(decode("Zh==").unwrap(), b"f");
    }

    #[test]
    fn restores_missing_padding() {
        let decode = create_from_base64(None, true).unwrap();
        assert_eq!(decode("Zg").unwrap(), b"f");
        assert_eq!(decode("Zm8").unwrap(), b"fo");
        assert_eq!(decode("Z"), Err(Base64Error::InvalidLength));
    }
}
