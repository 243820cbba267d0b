/// Standard base64 alphabet (RFC 4648, section 4).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Maximum number of trailing padding characters in one quantum.
pub const MAX_PAD: usize = 2;

/// Sentinel in the reverse lookup table for bytes outside the alphabet.
pub(crate) const INVALID: u8 = 0xff;
