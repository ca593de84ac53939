use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATASET_PATH: &str = "data/dataset_labeled_final.csv";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 16;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Loaded at startup when the file exists.
    pub dataset_path: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = var("DASHBOARD_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let dataset_path = var("DASHBOARD_DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

        let max_upload_mb = match var("DASHBOARD_MAX_UPLOAD_MB") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .with_context(|| format!("DASHBOARD_MAX_UPLOAD_MB must be an integer, got {v:?}"))?,
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        if bind_addr.trim().is_empty() {
            bail!("DASHBOARD_BIND_ADDR must not be empty");
        }
        if max_upload_mb == 0 {
            bail!("DASHBOARD_MAX_UPLOAD_MB must be at least 1");
        }

        Ok(Self {
            bind_addr,
            dataset_path,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        })
    }
}
