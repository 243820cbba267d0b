//! Append-only, length-capped list of saved conversions.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::HistoryError;

/// What a tool hands over when the user saves a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub tool: String,
    pub details: String,
    pub input: String,
    pub output: String,
}

impl HistoryEntry {
    pub fn new(
        tool: impl Into<String>,
        details: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            details: details.into(),
            input: input.into(),
            output: output.into(),
        }
    }
}

/// A stored entry. `timestamp` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub timestamp: i64,
    #[serde(flatten)]
    pub entry: HistoryEntry,
}

/// Newest-first history holding at most `limit` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    items: Vec<HistoryItem>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    /// Reads a history file. A missing file is an empty history, and so is a
    /// corrupt one (logged). Items beyond `limit` are dropped.
    pub fn load(path: &Path, limit: usize) -> Result<Self, HistoryError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::new(limit)),
            Err(err) => return Err(err.into()),
        };

        let mut items: Vec<HistoryItem> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "error parsing history");
                Vec::new()
            }
        };
        items.truncate(limit);
        Ok(Self { items, limit })
    }

    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(&self.items)?)?;
        Ok(())
    }

    /// Stamps `entry` with a fresh id and the current time and puts it first.
    /// Returns the stored item, or `None` when the limit is zero.
    pub fn add(&mut self, entry: HistoryEntry) -> Option<&HistoryItem> {
        let item = HistoryItem {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            entry,
        };
        debug!(id = %item.id, tool = %item.entry.tool, "history add");
        self.items.insert(0, item);
        self.items.truncate(self.limit);
        self.items.first()
    }

    /// Removes the item with `id`, reporting whether one was found.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Changes the cap, dropping the oldest items if needed.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.items.truncate(limit);
    }
}
