//! Settings stores.
//!
//! [`FileSettingsStore`] reads a JSON document mapping option keys to blobs,
//! e.g. `{ "advanced-search-settings": { "toggle-css": "1" } }`. The file is
//! read on every lookup so edits apply to the next request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use taxsearch_core::host::SettingsStore;

use crate::error::HostError;

#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document.
    pub fn read_all(&self) -> Result<Map<String, Value>, HostError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| HostError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| HostError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        match self.read_all() {
            Ok(mut options) => options.remove(key),
            Err(HostError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "settings file missing");
                None
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "settings file unreadable");
                None
            }
        }
    }
}

/// In-memory settings, keyed like the file store.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    options: HashMap<String, Value>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.options.insert(key.into(), value);
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.options.get(key).cloned()
    }
}
