use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::app::domain::Document;
use crate::app::infrastructure::error::Result;

/// Keys held by the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    Preamble,
    Body,
    Extensions,
}

impl SettingsKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preamble => "preamble",
            Self::Body => "body",
            Self::Extensions => "extensions",
        }
    }

    pub fn all() -> &'static [SettingsKey] {
        &[Self::Preamble, Self::Body, Self::Extensions]
    }
}

/// Persistent key/value storage for the document template.
pub trait SettingsStore {
    /// Stored value, or an empty string if the key was never set.
    fn get(&self, key: SettingsKey) -> String;

    fn set(&mut self, key: SettingsKey, value: String);

    /// Flush all values to disk.
    fn save(&mut self) -> Result<()>;

    /// Read the whole template at once.
    fn load_defaults(&self) -> Document {
        Document::new(
            self.get(SettingsKey::Preamble),
            self.get(SettingsKey::Body),
            self.get(SettingsKey::Extensions),
        )
    }
}

/// On-disk layout of `settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default)]
    pub preamble: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub extensions: String,
}

/// What `JsonSettingsStore::open` found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Missing,
    Loaded,
    /// Present but unreadable or not valid JSON. Left untouched until the
    /// user explicitly saves new settings.
    Damaged,
}

/// Settings store backed by a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
    values: StoredSettings,
    state: FileState,
}

impl JsonSettingsStore {
    /// Load settings from `path`, or start from empty defaults if the file is
    /// missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let (values, state) = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => (settings, FileState::Loaded),
                Err(e) => {
                    log::warn!(
                        "Failed to parse {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    (StoredSettings::default(), FileState::Damaged)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                (StoredSettings::default(), FileState::Missing)
            }
            Err(e) => {
                log::warn!(
                    "Failed to read {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                (StoredSettings::default(), FileState::Damaged)
            }
        };

        Self {
            path,
            values,
            state,
        }
    }

    /// Write the file if there was none yet. An existing file, even one that
    /// failed to parse, is never replaced here.
    pub fn ensure_exists(&mut self) -> Result<()> {
        if self.state == FileState::Missing {
            self.save()?;
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mdtex");
        path.push("settings.json");
        path
    }

    pub fn state(&self) -> FileState {
        self.state
    }

    pub fn values(&self) -> &StoredSettings {
        &self.values
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get(&self, key: SettingsKey) -> String {
        match key {
            SettingsKey::Preamble => self.values.preamble.clone(),
            SettingsKey::Body => self.values.body.clone(),
            SettingsKey::Extensions => self.values.extensions.clone(),
        }
    }

    fn set(&mut self, key: SettingsKey, value: String) {
        match key {
            SettingsKey::Preamble => self.values.preamble = value,
            SettingsKey::Body => self.values.body = value,
            SettingsKey::Extensions => self.values.extensions = value,
        }
    }

    fn save(&mut self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        self.state = FileState::Loaded;
        log::debug!("Settings written to {}", self.path.display());

        Ok(())
    }
}
