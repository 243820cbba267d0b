//! The seven rendered views and the mode derived from them.

use serde::Serialize;

/// Identifies one converter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Text,
    Base64,
    HexBytes,
    BinaryStream,
    Decimal,
    BinaryNum,
    HexNum,
}

impl Field {
    pub const BYTES: [Field; 4] = [Field::Text, Field::Base64, Field::HexBytes, Field::BinaryStream];
    pub const NUMERIC: [Field; 3] = [Field::Decimal, Field::BinaryNum, Field::HexNum];

    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Decimal | Field::BinaryNum | Field::HexNum)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Text => "Text",
            Field::Base64 => "Base64",
            Field::HexBytes => "Hex bytes",
            Field::BinaryStream => "Binary bytes",
            Field::Decimal => "Decimal",
            Field::BinaryNum => "Binary",
            Field::HexNum => "Hex",
        }
    }
}

/// Displayed text of every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Views {
    pub text: String,
    pub base64: String,
    pub hex_bytes: String,
    pub binary_stream: String,
    pub decimal: String,
    pub binary_num: String,
    pub hex_num: String,
}

impl Views {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Text => &self.text,
            Field::Base64 => &self.base64,
            Field::HexBytes => &self.hex_bytes,
            Field::BinaryStream => &self.binary_stream,
            Field::Decimal => &self.decimal,
            Field::BinaryNum => &self.binary_num,
            Field::HexNum => &self.hex_num,
        }
    }

    pub(crate) fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Text => &mut self.text,
            Field::Base64 => &mut self.base64,
            Field::HexBytes => &mut self.hex_bytes,
            Field::BinaryStream => &mut self.binary_stream,
            Field::Decimal => &mut self.decimal,
            Field::BinaryNum => &mut self.binary_num,
            Field::HexNum => &mut self.hex_num,
        }
    }

    pub fn has_byte_content(&self) -> bool {
        Field::BYTES.iter().any(|&f| !self.get(f).is_empty())
    }

    pub fn has_numeric_content(&self) -> bool {
        Field::NUMERIC.iter().any(|&f| !self.get(f).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_byte_content() && !self.has_numeric_content()
    }

    /// Which group of fields currently owns the value.
    ///
    /// Any content in a byte view means byte mode, in which the numeric views
    /// are read-only mirrors.
    pub fn mode(&self) -> Mode<'_> {
        if self.has_byte_content() {
            Mode::TextBytes(ByteViews {
                text: &self.text,
                base64: &self.base64,
                hex_bytes: &self.hex_bytes,
                binary_stream: &self.binary_stream,
            })
        } else if self.has_numeric_content() {
            Mode::Numeric(NumericViews {
                decimal: &self.decimal,
                binary: &self.binary_num,
                hex: &self.hex_num,
            })
        } else {
            Mode::Empty
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Nothing populated.
    Empty,
    TextBytes(ByteViews<'a>),
    Numeric(NumericViews<'a>),
}

impl Mode<'_> {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Mode::Numeric(_))
    }

    pub fn is_text_bytes(&self) -> bool {
        matches!(self, Mode::TextBytes(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteViews<'a> {
    pub text: &'a str,
    pub base64: &'a str,
    pub hex_bytes: &'a str,
    pub binary_stream: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericViews<'a> {
    pub decimal: &'a str,
    pub binary: &'a str,
    pub hex: &'a str,
}
