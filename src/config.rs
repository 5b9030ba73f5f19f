use crate::utils::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Applied to the HTTP client only when set.
    pub timeout_seconds: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory, then from the data
    /// directory, and falls back to defaults. The API key from the
    /// environment always wins over the file.
    pub fn load() -> Result<Self> {
        let candidates = [
            Some(std::env::current_dir()?.join(CONFIG_FILE)),
            paths::get_data_dir().ok().map(|dir| dir.join(CONFIG_FILE)),
        ];

        let mut config = match candidates.iter().flatten().find(|path| path.exists()) {
            Some(path) => Self::load_from(path)?,
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.gateway.api_key = Some(key.trim().to_string());
            }
        }
    }
}
