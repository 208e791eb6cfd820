//! Configuration management for the fordev client.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default site serving the generator forms.
pub const DEFAULT_BASE_URL: &str = "https://www.4devs.com.br";

/// Default desktop browser user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Client configuration.
///
/// This is loaded from `~/.config/fordev/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host of the generator site, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML or fail validation
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `FORDEV_BASE_URL`: Override the generator site
    /// - `FORDEV_TIMEOUT_SECS`: Override the request timeout
    /// - `FORDEV_USER_AGENT`: Override the user agent
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup; unparsable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("FORDEV_BASE_URL") {
            tracing::debug!("Override base_url from env: {}", val);
            self.base_url = val;
        }

        if let Some(val) = lookup("FORDEV_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.timeout_secs = secs;
                tracing::debug!("Override timeout_secs from env: {}", secs);
            }
        }

        if let Some(val) = lookup("FORDEV_USER_AGENT") {
            tracing::debug!("Override user_agent from env");
            self.user_agent = val;
        }
    }

    /// Check that the values can drive a transport.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                reason: "cannot be empty".to_string(),
            });
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                reason: format!("must start with http:// or https://, got '{}'", self.base_url),
            });
        }

        if self.user_agent.chars().any(char::is_control) {
            return Err(ConfigError::InvalidValue {
                field: "user_agent".to_string(),
                reason: "cannot contain control characters".to_string(),
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit file, creating its directory.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/fordev/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("br", "fordev", "fordev").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.4devs.com.br");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = ClientConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("timeout_secs = 10"));

        let parsed = ClientConfig::from_toml_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");

        fs::write(&config_path, "timeout_secs = 25\n").expect("write config file");

        let loaded = ClientConfig::load_from(&config_path).expect("load config");
        assert_eq!(loaded.timeout_secs, 25);
        // Untouched keys keep their defaults
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FORDEV_BASE_URL", "http://127.0.0.1:8080"),
            ("FORDEV_TIMEOUT_SECS", "3"),
            ("FORDEV_USER_AGENT", "test-agent"),
        ]
        .into_iter()
        .collect();

        let mut config = ClientConfig::default();
        config.apply_env_overrides(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_env_override_unparsable_timeout_ignored() {
        let mut config = ClientConfig::default();
        config.apply_env_overrides(|key| {
            (key == "FORDEV_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ClientConfig::from_toml_str("timeout_secs = 0").expect_err("zero timeout");
        assert!(err.to_string().contains("timeout_secs"));

        let err = ClientConfig::from_toml_str("base_url = \"\"").expect_err("empty base url");
        assert!(err.to_string().contains("base_url"));

        let err = ClientConfig::from_toml_str("base_url = \"ftp://example.com\"")
            .expect_err("non-http base url");
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_save_to_round_trip() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("nested").join("config.toml");

        let config = ClientConfig {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_secs: 4,
            ..ClientConfig::default()
        };
        config.save_to(&config_path).expect("save config");

        let loaded = ClientConfig::load_from(&config_path).expect("reload config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_user_agent_with_newline_rejected() {
        let config = ClientConfig {
            user_agent: "agent\nX-Injected: 1".to_string(),
            ..ClientConfig::default()
        };
        let err = config.validate().expect_err("newline in user agent");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "user_agent"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ClientConfig::from_toml_str("timeout_secs = [").expect_err("bad TOML");
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
