use crate::config::schema::{self, Config};
use crate::error::{GatorError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-user config, placed in the home directory
pub const CONFIG_FILE_NAME: &str = ".gatorconfig.json";

/// Get config file path (`~/.gatorconfig.json`)
///
/// Only consults the environment; never touches the filesystem.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(GatorError::HomeDirUnavailable)?;
    Ok(home.join(CONFIG_FILE_NAME))
}

/// Reads and writes the config file at a fixed path.
///
/// Holds no cached state: each call is a complete transaction against disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create store backed by `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create store backed by `~/.gatorconfig.json`
    pub fn from_home() -> Result<Self> {
        Ok(Self::new(default_config_path()?))
    }

    /// Path of the backing file
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load config, creating the file with defaults if it doesn't exist
    pub fn read_config(&self) -> Result<Config> {
        if !self.exists() {
            self.create_default()?;
        }

        let content = fs::read_to_string(&self.path)?;
        let raw: Value = serde_json::from_str(&content)?;
        tracing::debug!("Read config from {}", self.path.display());

        schema::decode(&raw)
    }

    /// Replace the current user name and persist the whole config.
    ///
    /// The name is written as given; an empty name is only rejected by the next read.
    pub fn set_user(&self, name: &str) -> Result<()> {
        let mut config = self.read_config()?;
        config.current_user_name = name.to_string();
        self.write_config(&config)
    }

    /// Overwrite the file with `config`.
    ///
    /// Writes in place, so a symlinked config is updated through the link and
    /// an existing file keeps its permissions.
    pub fn write_config(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = schema::to_pretty_json(config)?;
        fs::write(&self.path, content)?;

        tracing::debug!("Wrote config to {}", self.path.display());
        Ok(())
    }

    fn create_default(&self) -> Result<()> {
        self.write_config(&Config::default())?;
        tracing::info!("Created default config file at: {}", self.path.display());
        Ok(())
    }
}
