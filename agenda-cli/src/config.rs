//! Configuration for the agenda CLI.
//!
//! The server URL is read from `<config dir>/agenda/config.toml`, with
//! the `AGENDA_SERVER_URL` environment variable taking precedence. A
//! missing file falls back to the default local server.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: default_server_url(),
        }
    }
}

fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Could not determine config directory")?
        .join("agenda")
        .join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Ok(url) = std::env::var("AGENDA_SERVER_URL") {
            if !url.is_empty() {
                return Ok(Config { server_url: url });
            }
        }

        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_server_url_parses() {
        let config: Config = toml::from_str("server_url = \"https://events.example.com\"").unwrap();
        assert_eq!(config.server_url, "https://events.example.com");
    }

    #[test]
    fn test_empty_file_falls_back_to_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }
}
