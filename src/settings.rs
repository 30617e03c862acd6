//! Persisted appearance settings
//!
//! Settings travel as one JSON blob under the `"keyboardSettings"` key of a
//! flat key-value store the host provides. Field names stay camelCase so the
//! blob remains readable next to what earlier builds wrote. Loading never
//! fails: missing or malformed data falls back to the documented defaults.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Store key the settings blob lives under.
pub const SETTINGS_KEY: &str = "keyboardSettings";

/// User-tunable keyboard appearance plus the god-mode flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyboardSettings {
    /// Background color behind the grid (any CSS color string).
    pub keyboard_color: String,
    /// Key cap color.
    pub key_color: String,
    /// Color of the live swipe trail.
    pub swipe_trail_color: String,
    /// Hide key labels, for people who have the layout memorized. Rendering
    /// only; gesture handling ignores it.
    pub god_mode: bool,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            keyboard_color: "#ddd".to_string(),
            key_color: "#888".to_string(),
            swipe_trail_color: "rgba(0,0,255,0.5)".to_string(),
            god_mode: false,
        }
    }
}

impl KeyboardSettings {
    /// Load settings from a store, or return defaults when the blob is
    /// missing or malformed.
    pub fn load_from(store: &dyn SettingsStore) -> Self {
        match store.load(SETTINGS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => {
                    info!("Loaded keyboard settings");
                    settings
                }
                Err(e) => {
                    warn!("Malformed keyboard settings ({e}), using defaults");
                    Self::default()
                }
            },
            None => {
                info!("No stored keyboard settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings to a store as pretty JSON.
    pub fn save_to(&self, store: &mut dyn SettingsStore) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            store.save(SETTINGS_KEY, &json);
        }
    }
}

/// Flat key-value persistence the host provides.
pub trait SettingsStore {
    /// Fetch the raw value for a key; `None` when absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist a value. Failures are the store's to log; callers never see
    /// them.
    fn save(&mut self, key: &str, value: &str);
}

/// File-per-key store under a state directory
/// (`~/.local/state/drastic-kbd/<key>.json`).
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the user state directory; `None` when $HOME is unset.
    pub fn user() -> Option<Self> {
        std::env::var("HOME")
            .ok()
            .map(|home| Self::new(PathBuf::from(home).join(".local/state/drastic-kbd")))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SettingsStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn save(&mut self, key: &str, value: &str) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&path, value) {
            warn!("Failed to save {key} to {path:?}: {e}");
        } else {
            info!("Saved {key} to {path:?}");
        }
    }
}

/// In-memory store for tests and the replay harness.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = KeyboardSettings::default();
        assert_eq!(settings.keyboard_color, "#ddd");
        assert_eq!(settings.key_color, "#888");
        assert_eq!(settings.swipe_trail_color, "rgba(0,0,255,0.5)");
        assert!(!settings.god_mode);
    }

    #[test]
    fn test_empty_store_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(
            KeyboardSettings::load_from(&store),
            KeyboardSettings::default()
        );
    }

    #[test]
    fn test_round_trip_through_a_store() {
        let mut store = MemoryStore::new();
        let settings = KeyboardSettings {
            keyboard_color: "#222".to_string(),
            key_color: "#eee".to_string(),
            swipe_trail_color: "rgba(255,0,0,0.8)".to_string(),
            god_mode: true,
        };

        settings.save_to(&mut store);
        assert_eq!(KeyboardSettings::load_from(&store), settings);
    }

    #[test]
    fn test_blob_uses_camel_case_field_names() {
        let mut store = MemoryStore::new();
        KeyboardSettings::default().save_to(&mut store);

        let raw = store.load(SETTINGS_KEY).unwrap();
        assert!(raw.contains("\"keyboardColor\""));
        assert!(raw.contains("\"swipeTrailColor\""));
        assert!(raw.contains("\"godMode\""));
    }

    #[test]
    fn test_malformed_blob_yields_defaults() {
        let mut store = MemoryStore::new();
        store.save(SETTINGS_KEY, "{not json at all");
        assert_eq!(
            KeyboardSettings::load_from(&store),
            KeyboardSettings::default()
        );
    }

    #[test]
    fn test_partial_blob_fills_missing_fields() {
        let mut store = MemoryStore::new();
        store.save(SETTINGS_KEY, r#"{"godMode":true}"#);

        let settings = KeyboardSettings::load_from(&store);
        assert!(settings.god_mode);
        assert_eq!(settings.keyboard_color, "#ddd");
    }

    #[test]
    fn test_file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert_eq!(store.load(SETTINGS_KEY), None);

        let settings = KeyboardSettings {
            god_mode: true,
            ..KeyboardSettings::default()
        };
        settings.save_to(&mut store);

        assert!(dir.path().join("keyboardSettings.json").exists());
        assert_eq!(KeyboardSettings::load_from(&store), settings);
    }
}
