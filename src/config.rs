//! Application configuration management.
//!
//! Configuration is read from `~/.config/meetcache/config.json` when
//! present; the API key may also come from the `MEETUP_API_KEY`
//! environment variable (a `.env` file works through dotenvy), which
//! takes precedence over the file.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "meetcache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default group when none is configured
const DEFAULT_GROUP_URLNAME: &str = "VegasJS";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub group_urlname: Option<String>,
    pub api_key: Option<String>,
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

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Cache directory, namespaced by group so switching groups never
    /// mixes cached payloads.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME).join(self.group_urlname()))
    }

    pub fn group_urlname(&self) -> String {
        self.group_urlname
            .clone()
            .unwrap_or_else(|| DEFAULT_GROUP_URLNAME.to_string())
    }

    /// API key: environment first, then config file.
    pub fn api_key(&self) -> Option<String> {
        std::env::var("MEETUP_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_group_applies() {
        let config = Config::default();
        assert_eq!(config.group_urlname(), "VegasJS");
    }

    #[test]
    fn configured_group_wins() {
        let config = Config {
            group_urlname: Some("rustlv".to_string()),
            api_key: None,
        };
        assert_eq!(config.group_urlname(), "rustlv");
    }
}
