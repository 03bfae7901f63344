//! Configuration management

use crate::error::{ChronologError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
        }
    }
}

impl Config {
    /// Load config from .chronolog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".chronolog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChronologError::NotChronologDirectory(path.to_path_buf())
            } else {
                ChronologError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ChronologError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .chronolog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(".chronolog");
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ChronologError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the API key, checking environment variables first
    pub fn get_api_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_env::{env_test_lock, EnvVarRestore};
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.endpoint.starts_with("https://"));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            model: "gemini-test".to_string(),
            ..Config::default()
        };

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".chronolog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".chronolog")).unwrap();
        fs::write(temp.path().join(".chronolog/config.toml"), "").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            ChronologError::NotChronologDirectory(_) => {}
            other => panic!("Expected NotChronologDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_api_key_ignores_blank_config_value() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _gemini = EnvVarRestore::capture("GEMINI_API_KEY");
        let _generic = EnvVarRestore::capture("API_KEY");
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");

        let config = Config {
            api_key: Some("   ".to_string()),
            ..Config::default()
        };
        assert_eq!(config.get_api_key(), None);

        let config = Config {
            api_key: Some("from-config".to_string()),
            ..Config::default()
        };
        assert_eq!(config.get_api_key().as_deref(), Some("from-config"));
    }

    #[test]
    fn test_get_api_key_env_overrides_config() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _gemini = EnvVarRestore::capture("GEMINI_API_KEY");
        let _generic = EnvVarRestore::capture("API_KEY");
        std::env::remove_var("GEMINI_API_KEY");
        std::env::set_var("API_KEY", "from-api-key");

        let config = Config {
            api_key: Some("from-config".to_string()),
            ..Config::default()
        };
        assert_eq!(config.get_api_key().as_deref(), Some("from-api-key"));

        std::env::set_var("GEMINI_API_KEY", "from-gemini");
        assert_eq!(config.get_api_key().as_deref(), Some("from-gemini"));
    }
}
