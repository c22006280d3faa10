//! Application configuration
//!
//! Configuration loaded from .gh-user-lookup.toml. Only deployment-specific
//! settings live here; paging and retry limits are compile-time constants.

use serde::{Deserialize, Serialize};

/// Public GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Application configuration loaded from .gh-user-lookup.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// REST API base URL (e.g. "https://ghe.example.com/api/v3" for GitHub Enterprise)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse a TOML document
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
