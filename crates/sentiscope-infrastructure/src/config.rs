//! Client configuration loading.
//!
//! The optional `config.toml` under the config directory currently carries
//! a single knob: the server base URL. A missing file is not an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::paths::SentiscopePaths;

/// Client configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the sentiment-analysis server.
    pub api_url: Option<String>,
}

impl ClientConfig {
    /// Loads the config file, returning defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be read or
    /// parsed.
    pub fn load(paths: &SentiscopePaths) -> Result<Self> {
        let config_path = match paths.config_file() {
            Ok(path) => path,
            Err(_) => return Ok(Self::default()),
        };
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }
}
