//! Configuration management for cooked

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::backend::DEFAULT_BACKEND_URL;
use crate::client::spoonacular::{API_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `api_key`
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";
/// Environment variable overriding `provider_url`
pub const PROVIDER_URL_ENV: &str = "COOKED_PROVIDER_URL";
/// Environment variable overriding `backend_url`
pub const BACKEND_URL_ENV: &str = "COOKED_BACKEND_URL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Spoonacular API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Recipe provider base URL
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    /// Profile backend base URL
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Per-request timeout for both upstreams
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Response cache TTL
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Default number of recipes per page or list
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Cap on parallel detail lookups during ingredient search; unset fires all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_details: Option<usize>,
}

fn default_provider_url() -> String {
    API_BASE_URL.to_string()
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_cache_ttl_secs() -> u64 {
    5 * 60
}

fn default_page_size() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            provider_url: default_provider_url(),
            backend_url: default_backend_url(),
            request_timeout_secs: default_request_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            page_size: default_page_size(),
            max_concurrent_details: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".cooked").join("config.yaml"))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or start from defaults when no file exists yet.
    ///
    /// Environment overrides are applied either way, so a bare
    /// `SPOONACULAR_API_KEY` is enough to run without `cooked init`.
    pub fn load_with_env(path: PathBuf) -> Result<Self> {
        let mut config = match Self::load_from(path) {
            Ok(config) => config,
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Self::default(),
            Err(e) => return Err(e),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply environment overrides. Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(url) = get(PROVIDER_URL_ENV) {
            self.provider_url = url;
        }
        if let Some(url) = get(BACKEND_URL_ENV) {
            self.backend_url = url;
        }
    }

    /// Check numeric settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be positive".into()).into());
        }
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid("cache_ttl_secs must be positive".into()).into());
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be positive".into()).into());
        }
        if self.max_concurrent_details == Some(0) {
            return Err(
                ConfigError::Invalid("max_concurrent_details must be positive".into()).into(),
            );
        }
        Ok(())
    }

    /// The Spoonacular key, or an error pointing at `cooked init`
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey.into())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.provider_url, "https://api.spoonacular.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.page_size, 10);
        assert!(config.max_concurrent_details.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            api_key: Some("key-123".to_string()),
            max_concurrent_details: Some(4),
            ..Config::default()
        };
        config.save_to(path.clone()).unwrap();

        assert_eq!(Config::load_from(path).unwrap(), config);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        Config::default().save_to(path.clone()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_key: abc\npage_size: 25\n").unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.cache_ttl_secs, 300);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "max_concurrent_details: 0\n").unwrap();

        let err = Config::load_from(path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (API_KEY_ENV, "from-env"),
            (PROVIDER_URL_ENV, "http://localhost:9999"),
            (BACKEND_URL_ENV, "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.provider_url, "http://localhost:9999");
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_require_api_key() {
        let mut config = Config::default();
        assert!(matches!(
            config.require_api_key(),
            Err(Error::Config(ConfigError::MissingApiKey))
        ));

        config.api_key = Some("   ".to_string());
        assert!(config.require_api_key().is_err());

        config.api_key = Some("abc".to_string());
        assert_eq!(config.require_api_key().unwrap(), "abc");
    }
}
