//! Preference persistence module
//! Stores the notification toggle as JSON in the user config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const APP_DIR: &str = "barcode-origin";
const PREFS_FILENAME: &str = "prefs.json";

/// Persisted user preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prefs {
    /// Whether scan results raise a desktop notification
    pub notifications: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            notifications: true,
        }
    }
}

/// Errors during preference load/save
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
    #[error("Malformed preference file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Gets the full path to the preference file
fn prefs_path() -> Result<PathBuf, PrefsError> {
    let config_dir = dirs::config_dir().ok_or(PrefsError::NoConfigDir)?;
    Ok(config_dir.join(APP_DIR).join(PREFS_FILENAME))
}

fn try_load() -> Result<Option<Prefs>, PrefsError> {
    let path = prefs_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Loads preferences, falling back to defaults when the file is missing or
/// unreadable. Never fails: a broken preference file must not block startup.
pub fn load() -> Prefs {
    match try_load() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => Prefs::default(),
        Err(e) => {
            tracing::warn!("Failed to load preferences, using defaults: {}", e);
            Prefs::default()
        }
    }
}

/// Saves preferences, creating the config directory if needed
pub fn save(prefs: Prefs) -> Result<(), PrefsError> {
    let path = prefs_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(&prefs)?)?;
    tracing::info!("Preferences saved: {:?}", path);
    Ok(())
}
