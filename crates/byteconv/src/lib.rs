//! Byte / number representation converter.
//!
//! [`ByteConverter`] keeps seven textual views of one value consistent: UTF-8
//! text, base64, hex byte pairs and binary octets on the byte side, and the
//! decimal, binary and hex renderings of the big-endian integer those bytes
//! spell on the numeric side.
//!
//! # Example
//!
//! ```
//! use devsuite_byteconv::{ByteConverter, ConverterConfig};
//!
//! let mut conv = ByteConverter::new(ConverterConfig::default());
//! conv.edit_text("Hi");
//! assert_eq!(conv.views().hex_bytes, "48 69");
//! assert_eq!(conv.views().base64, "SGk=");
//! assert_eq!(conv.views().decimal, "18537");
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod history;
pub mod logging;
pub mod numeric;
pub mod text_tools;
pub mod views;

pub use config::{ConverterConfig, Settings};
pub use converter::ByteConverter;
pub use error::{ConfigError, FieldError, HistoryError};
pub use history::{History, HistoryEntry, HistoryItem};
pub use numeric::NumericBase;
pub use views::{ByteViews, Field, Mode, NumericViews, Views};

pub use devsuite_buffers::HexCase;
