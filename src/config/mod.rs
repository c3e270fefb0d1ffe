//! Configuration management module
//!
//! Handles loading, saving, and validation of the application configuration:
//! where the credential file lives, how secrets are stored, and logging.

use crate::{Result, StathleteError, APP_NAME, CONFIG_FILE, LOG_FILE, USER_DB};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// How secrets are written to the credential file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretPolicy {
    /// Store the secret exactly as typed
    #[default]
    Plaintext,
    /// Store `sha256$<salt>$<digest>` with a random per-account salt
    SaltedSha256,
}

impl SecretPolicy {
    /// Get a human-readable description of the policy
    pub fn description(&self) -> &'static str {
        match self {
            SecretPolicy::Plaintext => "Plaintext",
            SecretPolicy::SaltedSha256 => "Salted SHA-256",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Credential file, relative paths resolve against the working directory
    pub store_path: PathBuf,
    /// Secret storage policy for newly registered accounts
    pub secret_policy: SecretPolicy,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Log file override
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(USER_DB),
            secret_policy: SecretPolicy::Plaintext,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the credential file path
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set the secret policy
    pub fn with_secret_policy(mut self, policy: SecretPolicy) -> Self {
        self.secret_policy = policy;
        self
    }

    /// Set the default log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(StathleteError::ConfigError(
                "Store path must not be empty".to_string(),
            ));
        }

        if self.store_path.is_dir() {
            return Err(StathleteError::ConfigError(format!(
                "Store path is a directory: {}",
                self.store_path.display()
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(StathleteError::ConfigError(format!(
                "Unknown log level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Log file to write to; the configured one or the standard data location
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_NAME).join(LOG_FILE)))
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            StathleteError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            StathleteError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StathleteError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            StathleteError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/stathlete/stathlete.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            StathleteError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store_path, PathBuf::from("users.json"));
        assert_eq!(config.secret_policy, SecretPolicy::Plaintext);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("stathlete.toml");

        let config = AppConfig::new()
            .with_store_path(temp_dir.path().join("accounts.json"))
            .with_secret_policy(SecretPolicy::SaltedSha256)
            .with_log_level("debug");
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stathlete.toml");
        fs::write(&path, "secret_policy = \"salted-sha256\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.secret_policy, SecretPolicy::SaltedSha256);
        assert_eq!(config.store_path, PathBuf::from("users.json"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stathlete.toml");
        fs::write(&path, "secret_policy = \"rot13\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, StathleteError::ConfigError(_)));
    }

    #[test]
    fn test_validation() {
        assert!(AppConfig::new().with_store_path("").validate().is_err());
        assert!(AppConfig::new().with_log_level("loud").validate().is_err());
        assert!(AppConfig::new().with_log_level("WARN").validate().is_ok());

        let temp_dir = TempDir::new().unwrap();
        assert!(AppConfig::new()
            .with_store_path(temp_dir.path())
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("stathlete"));
        assert!(path.to_string_lossy().ends_with("stathlete.toml"));
    }
}
