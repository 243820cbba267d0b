//! The byte / number converter.
//!
//! Two groups of fields share one component. The byte group (text, base64,
//! hex bytes, binary bytes) is backed by a canonical byte sequence; a valid
//! edit to any of them re-derives the other three plus the numeric group,
//! which then mirrors the big-endian integer of those bytes. The numeric
//! group (decimal, binary, hex) can also be edited on its own, but only
//! after the byte group has been emptied, and it never writes back into the
//! byte group.
//!
//! Invalid input stays in its field as typed and records a [`FieldError`]
//! for that field; nothing else changes until the input is fixed.

use devsuite_base64::{from_base64, is_base64, to_base64};
use devsuite_buffers::{
    binary_octets, decode_utf8, hex_octets, parse_binary_octets, parse_hex_octets,
    print_octets_default, utf8,
};
use num_bigint::BigUint;
use tracing::debug;

use crate::config::ConverterConfig;
use crate::error::FieldError;
use crate::history::HistoryEntry;
use crate::numeric::{self, NumericBase};
use crate::views::{Field, Mode, Views};

#[derive(Debug, Clone)]
pub struct ByteConverter {
    config: ConverterConfig,
    views: Views,
    bytes: Vec<u8>,
    value: Option<BigUint>,
    byte_error: Option<(Field, FieldError)>,
    numeric_error: Option<(Field, FieldError)>,
    last_numeric: Option<NumericBase>,
}

impl Default for ByteConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl ByteConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            views: Views::default(),
            bytes: Vec::new(),
            value: None,
            byte_error: None,
            numeric_error: None,
            last_numeric: None,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn mode(&self) -> Mode<'_> {
        self.views.mode()
    }

    /// The canonical byte sequence. Empty in numeric mode.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The integer behind the numeric views, if they hold a valid value.
    pub fn value(&self) -> Option<&BigUint> {
        self.value.as_ref()
    }

    /// UTF-8 reading of the byte sequence; `None` when there are no bytes or
    /// they are not valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        if self.bytes.is_empty() {
            return None;
        }
        std::str::from_utf8(&self.bytes).ok()
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        [&self.byte_error, &self.numeric_error]
            .into_iter()
            .flatten()
            .find(|(f, _)| *f == field)
            .map(|(_, err)| err)
    }

    /// Every field currently flagged, byte group first.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &FieldError)> + '_ {
        [&self.byte_error, &self.numeric_error]
            .into_iter()
            .flatten()
            .map(|(f, err)| (*f, err))
    }

    /// Routes raw input to the edit operation for `field`.
    pub fn edit(&mut self, field: Field, raw: &str) -> Result<(), FieldError> {
        match field {
            Field::Text => {
                self.edit_text(raw);
                Ok(())
            }
            Field::Base64 => self.edit_base64(raw),
            Field::HexBytes => self.edit_hex_bytes(raw),
            Field::BinaryStream => self.edit_binary_stream(raw),
            Field::Decimal => self.edit_decimal(raw),
            Field::BinaryNum => self.edit_binary_num(raw),
            Field::HexNum => self.edit_hex_num(raw),
        }
    }

    pub fn edit_text(&mut self, new_text: &str) {
        if new_text.is_empty() {
            self.clear_all();
            return;
        }
        self.views.text = new_text.to_owned();
        self.propagate(utf8(new_text), Field::Text);
    }

    pub fn edit_base64(&mut self, raw: &str) -> Result<(), FieldError> {
        self.views.base64 = raw.to_owned();
        let value = raw.trim();
        if value.is_empty() {
            self.clear_all();
            return Ok(());
        }
        if !is_base64(value) {
            return self.reject(Field::Base64, FieldError::InvalidBase64);
        }
        match from_base64(value) {
            Ok(bytes) => {
                self.propagate(bytes, Field::Base64);
                Ok(())
            }
            Err(_) => self.reject(Field::Base64, FieldError::InvalidBase64),
        }
    }

    pub fn edit_hex_bytes(&mut self, raw: &str) -> Result<(), FieldError> {
        self.edit_octets(Field::HexBytes, raw, parse_hex_octets)
    }

    pub fn edit_binary_stream(&mut self, raw: &str) -> Result<(), FieldError> {
        self.edit_octets(Field::BinaryStream, raw, parse_binary_octets)
    }

    pub fn edit_decimal(&mut self, raw: &str) -> Result<(), FieldError> {
        self.edit_numeric(NumericBase::Decimal, raw)
    }

    pub fn edit_binary_num(&mut self, raw: &str) -> Result<(), FieldError> {
        self.edit_numeric(NumericBase::Binary, raw)
    }

    pub fn edit_hex_num(&mut self, raw: &str) -> Result<(), FieldError> {
        self.edit_numeric(NumericBase::Hex, raw)
    }

    /// Empties every field and forgets every error.
    pub fn clear_all(&mut self) {
        self.views = Views::default();
        self.bytes.clear();
        self.value = None;
        self.byte_error = None;
        self.numeric_error = None;
        self.last_numeric = None;
    }

    /// Summarizes the current state as a history entry, or `None` when
    /// nothing is populated. Does not modify the converter.
    pub fn save_snapshot(&self) -> Option<HistoryEntry> {
        let tool = self.config.tool_name.as_str();
        match self.views.mode() {
            Mode::Empty => None,
            Mode::TextBytes(v) => {
                let input = if v.text.is_empty() { v.base64 } else { v.text };
                Some(HistoryEntry::new(
                    tool,
                    "Text/Bytes",
                    input,
                    format!("Hex: {} | Bin: {}", v.hex_bytes, v.binary_stream),
                ))
            }
            Mode::Numeric(v) => {
                let source = self
                    .last_numeric
                    .filter(|b| !self.views.get(b.field()).is_empty())
                    .or_else(|| {
                        NumericBase::ALL
                            .into_iter()
                            .find(|b| !self.views.get(b.field()).is_empty())
                    })?;
                Some(HistoryEntry::new(
                    tool,
                    "Numeric",
                    format!("{}: {}", source.prefix(), self.views.get(source.field())),
                    format!("Dec: {} | Hex: {} | Bin: {}", v.decimal, v.hex, v.binary),
                ))
            }
        }
    }

    fn edit_octets(
        &mut self,
        field: Field,
        raw: &str,
        parse: fn(&str) -> Result<Vec<u8>, devsuite_buffers::OctetError>,
    ) -> Result<(), FieldError> {
        *self.views.get_mut(field) = raw.to_owned();
        if raw.chars().all(char::is_whitespace) {
            self.clear_all();
            return Ok(());
        }
        match parse(raw) {
            Ok(bytes) => {
                self.propagate(bytes, field);
                Ok(())
            }
            Err(err) => self.reject(field, err.into()),
        }
    }

    fn edit_numeric(&mut self, base: NumericBase, raw: &str) -> Result<(), FieldError> {
        if self.views.has_byte_content() {
            for field in Field::BYTES {
                self.views.get_mut(field).clear();
            }
            self.bytes.clear();
            self.byte_error = None;
        }
        self.numeric_error = None;

        let field = base.field();
        *self.views.get_mut(field) = raw.to_owned();
        self.last_numeric = Some(base);

        let siblings = NumericBase::ALL.into_iter().filter(|b| *b != base);
        if raw.trim().is_empty() {
            for sibling in siblings {
                self.views.get_mut(sibling.field()).clear();
            }
            self.value = None;
            return Ok(());
        }

        let value = match numeric::parse_unsigned(raw, base) {
            Ok(value) => value,
            Err(err) => return self.reject(field, err),
        };
        for sibling in siblings {
            *self.views.get_mut(sibling.field()) =
                numeric::render(&value, sibling, self.config.hex_case);
        }
        self.value = Some(value);
        Ok(())
    }

    /// Re-derives every view except `source` from `bytes`.
    fn propagate(&mut self, bytes: Vec<u8>, source: Field) {
        debug!(?source, len = bytes.len(), bytes = %print_octets_default(&bytes), "propagate");

        let case = self.config.hex_case;
        if source != Field::Text {
            self.views.text = decode_utf8(&bytes).unwrap_or_default();
        }
        if source != Field::Base64 {
            self.views.base64 = to_base64(&bytes);
        }
        if source != Field::HexBytes {
            self.views.hex_bytes = hex_octets(&bytes, case);
        }
        if source != Field::BinaryStream {
            self.views.binary_stream = binary_octets(&bytes);
        }

        self.value = numeric::from_be_bytes(&bytes);
        for base in NumericBase::ALL {
            *self.views.get_mut(base.field()) = self
                .value
                .as_ref()
                .map(|v| numeric::render(v, base, case))
                .unwrap_or_default();
        }

        self.bytes = bytes;
        self.byte_error = None;
        self.numeric_error = None;
        self.last_numeric = None;
    }

    fn reject(&mut self, field: Field, err: FieldError) -> Result<(), FieldError> {
        debug!(?field, error = %err, "edit rejected");
        let slot = (field, err.clone());
        if field.is_numeric() {
            self.numeric_error = Some(slot);
        } else {
            self.byte_error = Some(slot);
        }
        Err(err)
    }
}
