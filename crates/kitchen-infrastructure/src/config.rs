//! Application configuration.
//!
//! Loaded from `~/.config/smartkitchen/config.toml`, with environment
//! variables as a fallback for the API keys. A missing file is not an
//! error; everything defaults to unset.

use crate::paths::KitchenPaths;
use kitchen_core::{KitchenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

const GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";
const NEWS_KEY_ENV: &str = "NEWS_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KitchenConfig {
    /// API key for the generative-text endpoint.
    pub gemini_api_key: Option<String>,
    /// Model override; the client has its own default.
    pub gemini_model: Option<String>,
    /// API key for the news headlines endpoint.
    pub news_api_key: Option<String>,
}

impl KitchenConfig {
    /// Loads configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&KitchenPaths::new())
    }

    /// Loads configuration rooted at the given paths, then fills unset API
    /// keys from the environment.
    pub fn load_from(paths: &KitchenPaths) -> Result<Self> {
        let config_file = paths.config_file()?;
        let mut config = if config_file.exists() {
            let content = fs::read_to_string(&config_file).map_err(|err| {
                KitchenError::config(format!(
                    "failed to read config file {:?}: {}",
                    config_file, err
                ))
            })?;
            toml::from_str(&content).map_err(|err| {
                KitchenError::config(format!(
                    "failed to parse config file {:?}: {}",
                    config_file, err
                ))
            })?
        } else {
            Self::default()
        };

        if config.gemini_api_key.is_none() {
            config.gemini_api_key = std::env::var(GEMINI_KEY_ENV).ok();
        }
        if config.news_api_key.is_none() {
            config.news_api_key = std::env::var(NEWS_KEY_ENV).ok();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = KitchenPaths::with_base(dir.path());
        fs::create_dir_all(paths.config_dir().unwrap()).unwrap();
        fs::write(
            paths.config_file().unwrap(),
            "gemini_api_key = \"test-key\"\ngemini_model = \"gemini-1.5-pro\"\n",
        )
        .unwrap();

        let config = KitchenConfig::load_from(&paths).unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("test-key"));
        assert_eq!(config.gemini_model.as_deref(), Some("gemini-1.5-pro"));
    }

    #[test]
    fn missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = KitchenPaths::with_base(dir.path());
        let config = KitchenConfig::load_from(&paths).unwrap();
        assert!(config.gemini_model.is_none());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = KitchenPaths::with_base(dir.path());
        fs::create_dir_all(paths.config_dir().unwrap()).unwrap();
        fs::write(paths.config_file().unwrap(), "gemini_api_key = [not toml").unwrap();

        let err = KitchenConfig::load_from(&paths).unwrap_err();
        assert!(matches!(err, KitchenError::Config(_)));
    }
}
