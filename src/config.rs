//! Application configuration.
//!
//! The backend origin and request timeout come from, in increasing
//! precedence: the compiled-in default, `~/.config/tix/config.yaml` (when it
//! exists), and the `TIX_BACKEND_URL` environment variable.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TixError};

/// Backend origin used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str =
    "https://ticket-assignment-system-backend-thiago-butignon.vercel.app";

/// Environment variable overriding the backend origin.
pub const BACKEND_URL_ENV: &str = "TIX_BACKEND_URL";

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ticket backend origin
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    /// Path to the per-user config file, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tix")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration, applying the environment override last.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = match path {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific YAML file.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Apply the `TIX_BACKEND_URL` override if set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var(BACKEND_URL_ENV)
            && !url.trim().is_empty()
        {
            self.backend_url = url.trim().to_string();
        }
    }

    /// Parse the configured backend origin.
    pub fn backend_url(&self) -> Result<Url> {
        Url::parse(self.backend_url.trim_end_matches('/')).map_err(|e| {
            TixError::Config(format!(
                "invalid backend URL '{}': {}",
                self.backend_url, e
            ))
        })
    }
}
