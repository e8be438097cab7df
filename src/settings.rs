//! Persistence for the action's settings.
//!
//! The host application owns settings storage and hands each action a JSON
//! object. [`SettingsStore`] is that seam; [`JsonFileStore`] keeps the object in
//! a file for hosts (and tools) that have no store of their own.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A place the action's settings object is loaded from and saved to.
pub trait SettingsStore {
    fn load(&self) -> Result<Map<String, Value>>;
    fn save(&mut self, settings: &Map<String, Value>) -> Result<()>;
}

/// Keeps settings in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: Map<String, Value>,
}

impl MemoryStore {
    pub fn new(settings: Map<String, Value>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Map<String, Value>> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &Map<String, Value>) -> Result<()> {
        self.settings = settings.clone();
        Ok(())
    }
}

/// Stores settings as a pretty-printed JSON object in a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/dial-hotkey/settings.json`, e.g.
    /// `~/.config/dial-hotkey/settings.json` on Linux.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(dir.join("dial-hotkey").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    /// A missing file loads as an empty object.
    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            log::debug!("No settings file at {:?}, using defaults", self.path);
            return Ok(Map::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", self.path))
    }

    fn save(&mut self, settings: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        let contents = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert!(store.load().unwrap().is_empty());

        let mut settings = Map::new();
        settings.insert("press_hotkey".into(), json!("Ctrl+S"));
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut store = JsonFileStore::new(&path);

        let mut settings = Map::new();
        settings.insert("clockwise_hotkey".into(), json!("Ctrl+Alt+Right"));
        store.save(&settings).unwrap();

        assert!(path.exists());
        assert_eq!(JsonFileStore::new(&path).load().unwrap(), settings);
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileStore::new(&path).load().is_err());
    }
}
