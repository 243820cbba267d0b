//! UTF-8 conversions.

/// Converts a string to its UTF-8 bytes.
///
/// # Example
///
/// ```
/// use devsuite_buffers::utf8;
///
/// assert_eq!(utf8("hello"), b"hello".to_vec());
/// assert_eq!(utf8("日本"), vec![0xE6, 0x97, 0xA5, 0xE6, 0x9C, 0xAC]);
/// ```
pub fn utf8(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Strict UTF-8 decoding. Returns `None` for any malformed sequence rather
/// than substituting replacement characters.
///
/// # Example
///
/// ```
/// use devsuite_buffers::decode_utf8;
///
/// assert_eq!(decode_utf8(b"Hi").as_deref(), Some("Hi"));
/// assert_eq!(decode_utf8(&[0xff, 0xfe]), None);
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_owned)
}
