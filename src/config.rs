//! Browser configuration
//!
//! Loaded from a YAML file. The path comes from `CATALOG_CONFIG`, falling
//! back to `catalog.yaml`; a missing default file means default settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

pub const CONFIG_ENV_VAR: &str = "CATALOG_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "catalog.yaml";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No products matching selected criteria";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Dataset file; the bundled sample when unset
    pub data: Option<PathBuf>,

    /// Default tracing directive, extended by `RUST_LOG`
    pub log_filter: String,

    /// Allow coloured output; `false` disables colour even on a terminal.
    /// When `true`, colour follows `NO_COLOR` and terminal detection.
    pub color: bool,

    /// Message shown instead of the table when filters match nothing
    pub empty_message: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            data: None,
            log_filter: "warn".to_string(),
            color: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

pub struct ConfigLoader {
    path: PathBuf,
    explicit: bool,
}

impl ConfigLoader {
    /// A loader for an explicitly named file, which must exist
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    /// Create loader from CATALOG_CONFIG env var or default to "catalog.yaml"
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::new(path),
            Err(_) => Self {
                path: PathBuf::from(DEFAULT_CONFIG_FILE),
                explicit: false,
            },
        }
    }

    pub fn load(&self) -> Result<BrowserConfig> {
        if !self.explicit && !self.path.exists() {
            return Ok(BrowserConfig::default());
        }

        info!("Loading browser configuration from {}", self.path.display());

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let mut config: BrowserConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        // dataset paths are relative to the config file
        if let (Some(data), Some(dir)) = (config.data.as_mut(), self.path.parent()) {
            if data.is_relative() {
                *data = dir.join(&*data);
            }
        }

        Ok(config)
    }
}
