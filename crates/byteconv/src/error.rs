use devsuite_buffers::OctetError;
use thiserror::Error;

/// Validation failure scoped to one converter field.
///
/// Display strings are the short inline messages shown next to the field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid Base64")]
    InvalidBase64,
    #[error("Hex only")]
    InvalidHexDigits,
    #[error("0/1 only")]
    InvalidBinaryDigits,
    #[error("Incomplete byte ({digits} digits, groups of {group})")]
    IncompleteByteGrouping { digits: usize, group: usize },
    #[error("Num only")]
    NonDecimalDigits,
    /// Only reachable if the integer parser refuses validated digits.
    #[error("Too big")]
    ValueTooLarge,
}

impl From<OctetError> for FieldError {
    fn from(err: OctetError) -> Self {
        match err {
            OctetError::InvalidDigit { radix: 2, .. } => FieldError::InvalidBinaryDigits,
            OctetError::InvalidDigit { .. } => FieldError::InvalidHexDigits,
            OctetError::IncompleteByte { digits, group } => {
                FieldError::IncompleteByteGrouping { digits, group }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history io: {0}")]
    Io(#[from] std::io::Error),
    #[error("history json: {0}")]
    Json(#[from] serde_json::Error),
}
