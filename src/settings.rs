//! Application settings persistence
//!
//! Handles saving and loading user preferences as JSON in the platform
//! config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub library: LibrarySettings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Image cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Overrides the platform cache directory
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Oldest images are evicted past this size
    #[serde(default = "default_max_cache_mb")]
    pub max_cache_mb: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            cache_dir: None,
            max_cache_mb: default_max_cache_mb(),
        }
    }
}

/// Where album records come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// JSON file with an array of records; built-in samples when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_max_cache_mb() -> u64 {
    200
}

impl StorageSettings {
    /// Effective cache directory
    pub fn resolved_cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(crate::cache::default_cache_dir)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "albumkit", "Albumkit")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::file_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to_file(&path)
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not determine config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("valid");
        assert_eq!(settings, Settings::default());
        assert!(settings.display.dark_mode);
        assert_eq!(settings.storage.max_cache_mb, 200);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"storage": {"max_cache_mb": 50}}"#).expect("valid");
        assert_eq!(settings.storage.max_cache_mb, 50);
        assert_eq!(settings.storage.cache_dir, None);
        assert!(settings.display.dark_mode);
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir()
            .join(format!("albumkit-settings-{}", std::process::id()))
            .join("settings.json");

        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.library.path = Some(PathBuf::from("/music/albums.json"));
        settings.save_to_file(&path).expect("save");

        let loaded = Settings::load_from_file(&path).expect("load");
        assert_eq!(loaded, settings);

        if let Some(parent) = path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "albumkit-settings-bad-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").expect("write");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_file(&path);
    }
}
