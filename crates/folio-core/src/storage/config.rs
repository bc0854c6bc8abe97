//! Configuration management
//!
//! Settings live in `~/.config/folio/config.toml`.
//! Priority: CLI argument > FOLIO_* environment variable > config.toml

use super::Result;
use crate::contact::RelaySettings;
use crate::error::StorageError;
use crate::layout::{LayoutConstants, LayoutOverrides};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_CONTENT: &str = "FOLIO_CONTENT";
pub const ENV_RELAY_ENDPOINT: &str = "FOLIO_RELAY_ENDPOINT";
pub const ENV_RELAY_SERVICE_ID: &str = "FOLIO_RELAY_SERVICE_ID";
pub const ENV_RELAY_TEMPLATE_ID: &str = "FOLIO_RELAY_TEMPLATE_ID";
pub const ENV_RELAY_PUBLIC_KEY: &str = "FOLIO_RELAY_PUBLIC_KEY";
pub const ENV_RELAY_TO_EMAIL: &str = "FOLIO_RELAY_TO_EMAIL";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Content document replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
    #[serde(default)]
    pub relay: RelaySettings,
    /// Layout constant overrides, applied on top of a preset
    #[serde(default, skip_serializing_if = "LayoutOverrides::is_empty")]
    pub layout: LayoutOverrides,
}

impl Config {
    /// Load configuration from file; a missing file yields defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// `~/.config/folio`
    pub fn config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(home_dir.join(".config").join("folio"))
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Config file inside a custom directory, if one was given
    pub fn path_in(config_dir: Option<&Path>) -> Option<PathBuf> {
        config_dir.map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Content path with fallback to environment variable
    pub fn content_path(&self) -> Option<PathBuf> {
        self.content_path_from(|key| std::env::var(key).ok())
    }

    fn content_path_from(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        lookup(ENV_CONTENT)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.content.clone())
    }

    /// Relay settings with environment variables taking priority over the file
    pub fn relay_settings(&self) -> RelaySettings {
        self.relay_settings_from(|key| std::env::var(key).ok())
    }

    fn relay_settings_from(&self, lookup: impl Fn(&str) -> Option<String>) -> RelaySettings {
        let pick = |key: &str, file: &Option<String>| {
            lookup(key).filter(|s| !s.is_empty()).or_else(|| file.clone())
        };
        RelaySettings {
            endpoint: pick(ENV_RELAY_ENDPOINT, &self.relay.endpoint),
            service_id: pick(ENV_RELAY_SERVICE_ID, &self.relay.service_id),
            template_id: pick(ENV_RELAY_TEMPLATE_ID, &self.relay.template_id),
            public_key: pick(ENV_RELAY_PUBLIC_KEY, &self.relay.public_key),
            to_email: pick(ENV_RELAY_TO_EMAIL, &self.relay.to_email),
        }
    }

    /// `preset` with the configured overrides applied
    pub fn layout_constants(&self, preset: LayoutConstants) -> LayoutConstants {
        preset.with_overrides(&self.layout)
    }
}
