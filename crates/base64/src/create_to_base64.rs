//! Factory for base64 encoders with custom alphabets.

use crate::constants::{ALPHABET, PAD};
use crate::Base64Error;

/// Creates a base64 encoder with a custom alphabet and padding character.
///
/// * `chars` - 64-character alphabet. Defaults to the standard alphabet.
/// * `pad` - padding character. Defaults to `=`; pass `Some("")` to disable
///   padding.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidCharSetLength`] if `chars` is not exactly 64
/// characters long.
///
/// # Example
///
/// ```
/// use devsuite_base64::create_to_base64;
///
/// let encode = create_to_base64(None, None).unwrap();
/// assert_eq!(encode(b"hello"), "aGVsbG8=");
///
/// let unpadded = create_to_base64(None, Some("")).unwrap();
/// assert_eq!(unpadded(b"hello"), "aGVsbG8");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8]) -> String, Base64Error> {
    let table: Vec<char> = chars.unwrap_or(ALPHABET).chars().collect();
    if table.len() != 64 {
        return Err(Base64Error::InvalidCharSetLength);
    }

    let pad = match pad {
        None => Some(PAD),
        Some(p) => {
            let mut it = p.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
    };

    Ok(move |bytes: &[u8]| encode(&table, pad, bytes))
}

/// Encodes `bytes` 3 octets at a time into 4 sextets.
pub(crate) fn encode(table: &[char], pad: Option<char>, bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    let mut chunks = bytes.chunks_exact(3);

    for chunk in &mut chunks {
        let v = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        out.push(table[(v >> 18) as usize & 0x3f]);
        out.push(table[(v >> 12) as usize & 0x3f]);
        out.push(table[(v >> 6) as usize & 0x3f]);
        out.push(table[v as usize & 0x3f]);
    }

    match *chunks.remainder() {
        [o1] => {
            out.push(table[(o1 >> 2) as usize]);
            out.push(table[((o1 & 0b11) << 4) as usize]);
            if let Some(p) = pad {
                out.push(p);
                out.push(p);
            }
        }
        [o1, o2] => {
            out.push(table[(o1 >> 2) as usize]);
            out.push(table[(((o1 & 0b11) << 4) | (o2 >> 4)) as usize]);
            out.push(table[((o2 & 0b1111) << 2) as usize]);
            if let Some(p) = pad {
                out.push(p);
            }
        }
        _ => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_alphabet() {
        assert!(matches!(
            create_to_base64(Some("abc"), None),
            Err(Base64Error::InvalidCharSetLength)
        ));
    }

    #[test]
    fn encodes_rfc4648_vectors() {
        let encode = create_to_base64(None, None).unwrap();
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg==");
        assert_eq!(encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn url_alphabet_without_padding() {
        let encode = create_to_base64(
            Some("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"),
            Some(""),
        )
        .unwrap();
        assert_eq!(encode(&[0xfb, 0xff]), "-_8");
    }
}
