//! Octet text formats for devsuite.
//!
//! Renders byte sequences as whitespace separated hex pairs or 8-bit binary
//! groups, parses those forms back, and wraps the UTF-8 conversions the byte
//! converter needs.
//!
//! # Example
//!
//! ```
//! use devsuite_buffers::{binary_octets, hex_octets, parse_hex_octets, HexCase};
//!
//! let bytes = parse_hex_octets("48 69").unwrap();
//! assert_eq!(bytes, b"Hi");
//! assert_eq!(hex_octets(&bytes, HexCase::Upper), "48 69");
//! assert_eq!(binary_octets(&bytes), "01001000 01101001");
//! ```

mod octets;
mod print_octets;
mod strings;

pub use octets::{binary_octets, hex_octets, parse_binary_octets, parse_hex_octets, HexCase};
pub use print_octets::{print_octets, print_octets_default};
pub use strings::{decode_utf8, utf8};

use thiserror::Error;

/// Error type for octet stream parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OctetError {
    /// A character outside the digit alphabet of `radix`.
    #[error("invalid base-{radix} digit {found:?}")]
    InvalidDigit { radix: u32, found: char },
    /// The digit count is not a whole number of `group`-digit bytes.
    #[error("incomplete byte: {digits} digits is not a multiple of {group}")]
    IncompleteByte { digits: usize, group: usize },
}
