//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (NPSFIND_*)
//! 2. TOML config file (`--config` or NPSFIND_CONFIG_FILE)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (NPSFIND_*)
/// 2. TOML config file
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// MapQuest API key for nearby-places lookups.
    ///
    /// Set via NPSFIND_PLACES_API_KEY environment variable.
    /// Required only when a nearby-places lookup misses the cache.
    #[serde(default)]
    pub places_api_key: Option<String>,

    /// Directory holding the three cache documents.
    ///
    /// Set via NPSFIND_CACHE_DIR environment variable.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Site root that relative park links are joined against.
    ///
    /// Set via NPSFIND_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Radius search endpoint.
    ///
    /// Set via NPSFIND_PLACES_URL environment variable.
    #[serde(default = "default_places_url")]
    pub places_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via NPSFIND_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via NPSFIND_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("./npsfind-cache")
}

fn default_base_url() -> String {
    "https://www.nps.gov".into()
}

fn default_places_url() -> String {
    "http://www.mapquestapi.com/search/v2/radius".into()
}

fn default_user_agent() -> String {
    "npsfind/0.1".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            places_api_key: None,
            cache_dir: default_cache_dir(),
            base_url: default_base_url(),
            places_url: default_places_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration, taking the TOML file path from `NPSFIND_CONFIG_FILE`.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var("NPSFIND_CONFIG_FILE").ok().map(PathBuf::from);
        Self::load_with_file(file.as_deref())
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `NPSFIND_`
    /// 2. TOML file at `config_file` (if given)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load_with_file(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(config_file).extract::<Self>().map_err(|e| ConfigError::LoadFailed(e.to_string())).and_then(
            |config| {
                config.validate()?;
                Ok(config)
            },
        )
    }

    fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("NPSFIND_").ignore(&["CONFIG_FILE"]).map(|key| key.as_str().to_lowercase().into()))
    }

    /// Check if the places API key is available (for deferred validation).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the key is not set or blank.
    pub fn require_places_api_key(&self) -> Result<&str, ConfigError> {
        self.places_api_key.as_deref().filter(|k| !k.trim().is_empty()).ok_or_else(|| ConfigError::Missing {
            field: "places_api_key".into(),
            hint: "Set NPSFIND_PLACES_API_KEY environment variable".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.cache_dir, PathBuf::from("./npsfind-cache"));
        assert_eq!(config.base_url, "https://www.nps.gov");
        assert_eq!(config.places_url, "http://www.mapquestapi.com/search/v2/radius");
        assert_eq!(config.user_agent, "npsfind/0.1");
        assert_eq!(config.timeout_ms, 20_000);
        assert!(config.places_api_key.is_none());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(20_000));
    }

    #[test]
    fn test_require_places_api_key_missing() {
        let config = AppConfig::default();
        let result = config.require_places_api_key();
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_require_places_api_key_blank() {
        let config = AppConfig { places_api_key: Some("  ".into()), ..Default::default() };
        assert!(matches!(config.require_places_api_key(), Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_require_places_api_key_present() {
        let config = AppConfig { places_api_key: Some("test-key".into()), ..Default::default() };
        let result = config.require_places_api_key();
        assert_eq!(result.unwrap(), "test-key");
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("npsfind.toml", "cache_dir = \"/tmp/from-file\"\ntimeout_ms = 5000\n")?;
            jail.set_env("NPSFIND_TIMEOUT_MS", "7000");
            jail.set_env("NPSFIND_PLACES_API_KEY", "env-key");

            let config = AppConfig::load_with_file(Some(Path::new("npsfind.toml"))).expect("config loads");
            assert_eq!(config.cache_dir, PathBuf::from("/tmp/from-file"));
            assert_eq!(config.timeout_ms, 7000);
            assert_eq!(config.places_api_key.as_deref(), Some("env-key"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_env_value_fails_validation() {
        Jail::expect_with(|jail| {
            jail.set_env("NPSFIND_TIMEOUT_MS", "10");
            let result = AppConfig::load_with_file(None);
            assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
            Ok(())
        });
    }
}
