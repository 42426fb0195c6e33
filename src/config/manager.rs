use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{Config, ConfigError};
use crate::utils::write_atomic;

const CONFIG_FILE_NAME: &str = "config.json";

/// Loads and stores [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE_NAME)))
    }

    /// Manager for `<config dir>/spendwise/config.json`. The directory is
    /// created on first save.
    pub fn default_location() -> Self {
        Self::new(Config::resolve_default_dir().join(CONFIG_FILE_NAME))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            let config: Config =
                serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
            debug!(path = %self.config_path.display(), "configuration loaded");
            Ok(config)
        } else {
            debug!(path = %self.config_path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.config_path, &json)?;
        debug!(path = %self.config_path.display(), "configuration saved");
        Ok(())
    }
}
