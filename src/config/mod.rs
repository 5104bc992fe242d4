//! Configuration management for AI-Blog

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default API base URL when neither flag, env nor config provide one
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// File name of the durable key-value storage kept next to the config file
const STORAGE_FILE_NAME: &str = "storage.yaml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the AI-Blog API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".aiblog").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Path of the durable storage file that sits beside the config file
    pub fn storage_path(config_path: &Path) -> PathBuf {
        match config_path.parent() {
            Some(dir) => dir.join(STORAGE_FILE_NAME),
            None => PathBuf::from(STORAGE_FILE_NAME),
        }
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Resolve the API URL: runtime override, then config, then default.
    ///
    /// Trailing slashes are dropped so paths can be appended directly.
    pub fn api_url(&self, api_override: Option<&str>) -> String {
        let url = api_override
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL);
        url.trim_end_matches('/').to_string()
    }
}
