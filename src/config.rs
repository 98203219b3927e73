//! Application configuration management.
//!
//! Configuration is stored at `~/.config/chatline/config.json` and holds the
//! API endpoint override plus the last username used for login. The endpoint
//! can also come from the `CHATLINE_API_URL` environment variable (a `.env`
//! file is honored by the binary).

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "chatline";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default API endpoint, matching the development backend.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the API endpoint.
const API_URL_ENV: &str = "CHATLINE_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the API base URL: config file, then environment, then default.
    pub fn resolve_api_url(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Directory holding the session file.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_value_wins() {
        let config = Config {
            api_url: Some("https://chat.example.com".to_string()),
            last_username: None,
        };
        assert_eq!(config.resolve_api_url(), "https://chat.example.com");
    }

    #[test]
    fn test_default_url_when_unset() {
        std::env::remove_var(API_URL_ENV);
        let config = Config::default();
        assert_eq!(config.resolve_api_url(), DEFAULT_API_URL);
    }
}
