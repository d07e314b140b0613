use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::env;

use crate::loader::{DEFAULT_DATE_FORMATS, LoaderOptions};
use crate::processor::DEFAULT_TOP_PRODUCTS;

pub const DATASET_PATH_ENV: &str = "DASHBOARD_DATASET";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub dataset: DatasetSection,
    #[serde(default)]
    pub dashboard: DashboardSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSection {
    pub path: String,
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    #[serde(default = "default_top_products")]
    pub top_products: usize,
    // Snapshot is written as JSON when set
    pub report_path: Option<String>,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            top_products: DEFAULT_TOP_PRODUCTS,
            report_path: None,
        }
    }
}

fn default_date_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect()
}

fn default_top_products() -> usize {
    DEFAULT_TOP_PRODUCTS
}

impl DashboardConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dashboard config file: {}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse dashboard config file: {}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Lets the environment point at a different dataset file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var(DATASET_PATH_ENV) {
            if !path.trim().is_empty() {
                self.dataset.path = path;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.dataset.path.trim().is_empty() {
            bail!("dataset.path must not be empty");
        }
        if self.dataset.date_formats.is_empty() {
            bail!("dataset.date_formats must list at least one format");
        }
        if self.dashboard.top_products == 0 {
            bail!("dashboard.top_products must be at least 1");
        }
        Ok(())
    }

    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            date_formats: self.dataset.date_formats.clone(),
        }
    }
}
