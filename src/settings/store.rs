//! JSON settings file.
//!
//! Stores settings in `<config dir>/YouAreHere/settings.json`
//! (`%APPDATA%\YouAreHere\settings.json` on Windows).
//!
//! Loading never fails from the caller's point of view: a missing file is
//! created with defaults, a corrupt file yields defaults and is left alone.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{PointerError, Result};
use crate::model::constants::{APP_DIR_NAME, SETTINGS_FILE_NAME};
use crate::model::Settings;

/// Persistence for the settings record.
pub trait SettingsStore {
    /// Read settings, falling back to defaults on any failure.
    fn load(&self) -> Settings;

    /// Write settings. Best effort: failures are logged and dropped.
    fn save(&self, settings: &Settings);
}

/// Settings stored as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user application data location.
    pub fn default_location() -> Result<Self> {
        let base = dirs::config_dir().ok_or(PointerError::NoConfigDir)?;
        Ok(Self::new(base.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read: I/O and parse errors are returned, values are validated.
    pub fn try_load(&self) -> Result<Settings> {
        let contents = fs::read_to_string(&self.path)?;
        let mut settings: Settings = serde_json::from_str(&contents)?;
        settings.validate();
        Ok(settings)
    }

    /// Strict write, creating the parent directory if needed.
    pub fn try_save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Settings {
        match self.try_load() {
            Ok(settings) => {
                debug!(path = %self.path.display(), "loaded settings");
                settings
            }
            Err(PointerError::SettingsIo(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no settings file, writing defaults");
                let settings = Settings::default();
                self.save(&settings);
                settings
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to load settings, using defaults");
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) {
        match self.try_save(settings) {
            Ok(()) => debug!(path = %self.path.display(), "saved settings"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to save settings"),
        }
    }
}
