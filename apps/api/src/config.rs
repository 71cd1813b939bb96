use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::analysis::SummarySelection;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: u64,
    pub upload_dir: Option<PathBuf>,
    pub vocabulary_path: Option<PathBuf>,
    pub summary_selection: SummarySelection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            upload_dir: None,
            vocabulary_path: None,
            summary_selection: SummarySelection::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .parse::<u64>()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
            None => defaults.max_upload_bytes,
        };
        if max_upload_bytes == 0 {
            bail!("MAX_UPLOAD_BYTES must be greater than zero");
        }

        let summary_selection = match lookup("SUMMARY_SELECTION") {
            Some(v) => v
                .parse::<SummarySelection>()
                .map_err(anyhow::Error::msg)
                .context("SUMMARY_SELECTION must be 'hash' or 'random'")?,
            None => defaults.summary_selection,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes,
            upload_dir: non_empty(lookup("UPLOAD_DIR")).map(PathBuf::from),
            vocabulary_path: non_empty(lookup("VOCABULARY_PATH")).map(PathBuf::from),
            summary_selection,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
