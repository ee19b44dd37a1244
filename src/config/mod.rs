//! Configuration module for pneu
//!
//! Manages application configuration including the catalog API endpoint.
//! Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Base URL used when nothing else is configured (a local dev server)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PneuConfig {
    /// Base URL of the catalog API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for PneuConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            quiet: false,
        }
    }
}

impl PneuConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("pneu").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the catalog endpoint, normalizing a trailing slash
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is empty or saving fails.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), ConfigError> {
        let trimmed = endpoint.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Message("Endpoint cannot be empty".to_string()));
        }
        self.endpoint = trimmed.to_string();
        self.save()
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PneuConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.quiet);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "endpoint = \"https://tires.example.com\"").unwrap();
        writeln!(file, "quiet = true").unwrap();

        let config = PneuConfig::load_from(file.path()).unwrap();
        assert_eq!(config.endpoint, "https://tires.example.com");
        assert!(config.quiet);
    }

    #[test]
    fn test_load_from_file_applies_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "quiet = true").unwrap();

        let config = PneuConfig::load_from(file.path()).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.quiet);
    }

    #[test]
    fn test_load_from_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "endpoint = [1, 2, 3]").unwrap();

        assert!(PneuConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = PneuConfig {
            endpoint: "http://10.0.0.5:8080".to_string(),
            quiet: true,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: PneuConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.endpoint, config.endpoint);
        assert_eq!(parsed.quiet, config.quiet);
    }
}
