//! Standard base64 decoding.

use crate::constants::{MAX_PAD, PAD};
use crate::create_from_base64;

/// Decodes a padded, standard-alphabet base64 string.
///
/// # Example
///
/// ```
/// use devsuite_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    let decoder = create_from_base64(None, false)?;
    decoder(encoded)
}

/// Whether `s` is shaped like padded standard base64: only alphabet
/// characters, at most two trailing `=` and a length that is a multiple of 4.
///
/// The empty string is valid and decodes to no bytes.
pub fn is_base64(s: &str) -> bool {
    if s.len() % 4 != 0 {
        return false;
    }
    let body = s.trim_end_matches(PAD);
    if s.len() - body.len() > MAX_PAD {
        return false;
    }
    body.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_check() {
        assert!(is_base64(""));
        assert!(is_base64("SGk="));
        assert!(is_base64("SA=="));
        assert!(is_base64("ab+/"));
        assert!(!is_base64("SGk"));
        assert!(!is_base64("S==="));
        assert!(!is_base64("SG=k"));
        assert!(!is_base64("SG-_"));
        assert!(!is_base64("SG k"));
    }
}
