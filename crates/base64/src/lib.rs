//! Standard base64 (RFC 4648) for devsuite.
//!
//! The encoder always pads with `=`. The decoder is strict about the shape of
//! its input (alphabet, padding, length) and is what the byte converter uses
//! to decide whether a base64 field is valid.
//!
//! # Example
//!
//! ```
//! use devsuite_base64::{from_base64, is_base64, to_base64};
//!
//! assert_eq!(to_base64(b"Hi"), "SGk=");
//! assert!(is_base64("SGk="));
//! assert_eq!(from_base64("SGk=").unwrap(), b"Hi");
//! ```

mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;

pub use constants::{ALPHABET, MAX_PAD, PAD};
pub use create_from_base64::create_from_base64;
pub use create_to_base64::create_to_base64;
pub use from_base64::{from_base64, is_base64};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    #[error("base64 alphabet must be exactly 64 characters")]
    InvalidCharSetLength,
    #[error("base64 input length must be a multiple of 4")]
    InvalidLength,
    #[error("invalid base64 character at offset {0}")]
    InvalidCharacter(usize),
    #[error("invalid base64 padding")]
    InvalidPadding,
}

/// Encodes bytes with the standard alphabet and `=` padding.
pub fn to_base64(bytes: &[u8]) -> String {
    let table: Vec<char> = ALPHABET.chars().collect();
    create_to_base64::encode(&table, Some(PAD), bytes)
}
