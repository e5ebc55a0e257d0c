//! Settings Manager
//!
//! Locates the configuration file in the platform config directory and
//! keeps the loaded [`Config`] in memory.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "gridborder";
const CONFIG_FILE: &str = "config.toml";

/// Owns the application configuration and its file location
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Platform config directory for GridBorder, e.g. `~/.config/gridborder`.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()).into()
            })
    }

    /// Creates the config directory if it does not exist yet.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir).map_err(|e| {
            SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e))
        })?;
        Ok(dir)
    }

    /// Default location of the configuration file.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Manager for the platform config file.
    pub fn new() -> SettingsResult<Self> {
        Ok(Self::with_path(Self::default_config_path()?))
    }

    /// Manager for a config file at `path`, starting from defaults.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Config::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Loads the config file. A missing file leaves the defaults in place.
    pub fn load(&mut self) -> SettingsResult<&Config> {
        if self.path.exists() {
            self.config = Config::load_from_file(&self.path)?;
            info!("Loaded settings from {}", self.path.display());
        } else {
            info!(
                "No settings at {}, using defaults",
                self.path.display()
            );
            self.config = Config::default();
        }
        Ok(&self.config)
    }

    /// Like [`load`](Self::load), but falls back to defaults when the file
    /// is unreadable or invalid.
    pub fn load_or_default(&mut self) -> &Config {
        if let Err(e) = self.load() {
            warn!("Ignoring settings at {}: {}", self.path.display(), e);
            self.config = Config::default();
        }
        &self.config
    }

    /// Writes the config, creating parent directories as needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        self.config.save_to_file(&self.path)?;
        info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
