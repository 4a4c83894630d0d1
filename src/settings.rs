// Import necessary libraries and modules for file I/O and serialization.
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{Result, TrackerError};
use crate::storage::DEFAULT_STORAGE_KEY;

// Define a structure to hold application settings with serialization and deserialization capabilities.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub storage_key: String, // Name of the saved record inside the data directory.
    pub data_dir: Option<PathBuf>, // Overrides ~/attribute_tracker/data.
    pub catalog_path: Option<PathBuf>, // Optional JSON catalog replacing the built-in actions.
    pub bar_max: u32, // Value at which an attribute bar is full.
    pub debug_mode: bool, // Flag to enable or disable debug logging.
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            catalog_path: None,
            bar_max: 100,
            debug_mode: false,
        }
    }
}

impl Settings {
    // The default data directory, ~/attribute_tracker/data.
    pub fn default_data_dir() -> Result<PathBuf> {
        let home_dir = dir::home_dir().ok_or(TrackerError::NoHomeDirectory)?;
        Ok(home_dir.join("attribute_tracker").join("data"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::default_data_dir(),
        }
    }

    // Load settings from the default location. Falls back to the defaults when the
    // file is unreadable and hands back the reason, since logging isn't up yet.
    pub fn load() -> (Self, Option<TrackerError>) {
        match Self::default_data_dir() {
            Ok(dir) => Self::load_or_default(dir.join("settings.json")),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    // A missing file is a first run: the defaults are written to `path`.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<TrackerError>) {
        let path = path.as_ref();
        match Self::load_settings_from_file(path) {
            Ok(settings) => (settings, None),
            Err(TrackerError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                let error = settings.save_to_file(path).err();
                (settings, error)
            }
            Err(e) => (Self::default(), Some(e)),
        }
    }

    // Load settings from a specified file path.
    pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?; // Read settings from file.
        let settings = serde_json::from_str(&data)?; // Deserialize JSON data into settings.
        Ok(settings)
    }

    // Save current settings to a specified file path.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?; // Serialize settings into pretty JSON format.
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?; // Create the directory if it doesn't exist.
        }
        let mut file = fs::File::create(path)?; // Create or overwrite the file.
        file.write_all(data.as_bytes())?; // Write the serialized data to the file.
        Ok(())
    }

    // The configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load_from_file(path),
            None => Ok(Catalog::default()),
        }
    }
}
