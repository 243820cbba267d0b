//! Settings file and the converter configuration derived from it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use devsuite_buffers::HexCase;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Tool label recorded on history entries.
pub const DEFAULT_TOOL_NAME: &str = "Number Base";

/// Persisted user settings.
///
/// Keys are camelCase so settings files written by the browser build load
/// unchanged; keys this crate does not use are ignored, and missing keys fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub hex_upper_case: bool,
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hex_upper_case: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file.
    ///
    /// A missing file yields the defaults. So does a file that fails to parse;
    /// that case is logged and otherwise ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "error parsing settings, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn hex_case(&self) -> HexCase {
        HexCase::from_upper(self.hex_upper_case)
    }
}

/// Configuration injected into a [`crate::ByteConverter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub hex_case: HexCase,
    pub tool_name: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::Upper,
            tool_name: DEFAULT_TOOL_NAME.to_string(),
        }
    }
}

impl From<&Settings> for ConverterConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            hex_case: settings.hex_case(),
            ..Self::default()
        }
    }
}
