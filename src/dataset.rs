//! Data source contract
//!
//! Three read-only collections loaded once before the catalog join runs.
//! Supports two sources:
//! 1. A dataset file: `.json`, `.yaml` or `.yml`
//! 2. The bundled sample dataset (`data/catalog.json`)

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::model::{Category, Product, User};

const SAMPLE_DATASET: &str = include_str!("../data/catalog.json");

/// Raw users, categories and products as delivered by the data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Dataset {
    /// The sample dataset compiled into the crate
    pub fn sample() -> Result<Self> {
        serde_json::from_str(SAMPLE_DATASET).context("Failed to parse bundled sample dataset")
    }

    /// Load a dataset file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading dataset from {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let dataset: Dataset = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "Unsupported dataset format for {} (expected .json, .yaml or .yml)",
                    path.display()
                ))
            }
        };

        info!(
            "Loaded {} users, {} categories, {} products",
            dataset.users.len(),
            dataset.categories.len(),
            dataset.products.len()
        );

        Ok(dataset)
    }
}
