//! Runtime settings, read from an optional JSON file.
//!
//! Cell size, tick interval and seeding density are fixed at compile time;
//! only presentation and reproducibility knobs live here.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::rendering::{Palette, SNAPSHOT_FILE_NAME};

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "LIFE_SETTINGS";

/// Settings file used when [`SETTINGS_ENV`] is unset
pub const DEFAULT_SETTINGS_FILE: &str = "life-settings.json";

pub const DEFAULT_WINDOW_TITLE: &str = "Game of Life";

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Failed to read the settings file from disk.
    #[error("failed to read settings file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The file is not valid settings JSON.
    #[error("failed to parse settings JSON: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    /// Seed for the grid RNG; None draws from OS entropy
    pub seed: Option<u64>,
    /// Where snapshots are written
    pub snapshot_path: PathBuf,
    pub palette: Palette,
    /// Show the generation badge and snapshot button
    pub show_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_owned(),
            seed: None,
            snapshot_path: PathBuf::from(SNAPSHOT_FILE_NAME),
            palette: Palette::default(),
            show_overlay: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] if the string is not valid JSON.
    pub fn parse(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be read, or
    /// [`SettingsError::Json`] if the content is not valid JSON.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load settings, falling back to defaults when the file is absent or broken
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(SettingsError::Io { source }) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    /// Settings file path from the environment, or the default name
    pub fn path_from_env() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }
}
