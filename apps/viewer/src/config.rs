use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_RESUME_DATA_PATH: &str = "data/resume.json";
const DEFAULT_TOAST_TTL_SECS: u64 = 5;
const DEFAULT_TOAST_CAPACITY: usize = 5;

/// Viewer configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_data_path: PathBuf,
    /// `None` keeps the session flag in memory for the life of the process.
    pub session_store_path: Option<PathBuf>,
    pub toast_ttl: Duration,
    pub toast_capacity: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resume_data_path: PathBuf::from(DEFAULT_RESUME_DATA_PATH),
            session_store_path: None,
            toast_ttl: Duration::from_secs(DEFAULT_TOAST_TTL_SECS),
            toast_capacity: DEFAULT_TOAST_CAPACITY,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let toast_ttl = match lookup("TOAST_TTL_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .context("TOAST_TTL_SECS must be a whole number of seconds")?,
            ),
            None => defaults.toast_ttl,
        };
        let toast_capacity = match lookup("TOAST_CAPACITY") {
            Some(raw) => raw
                .parse::<usize>()
                .context("TOAST_CAPACITY must be a non-negative integer")?,
            None => defaults.toast_capacity,
        };
        if toast_capacity == 0 {
            anyhow::bail!("TOAST_CAPACITY must be at least 1");
        }

        Ok(Config {
            resume_data_path: lookup("RESUME_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_data_path),
            session_store_path: lookup("SESSION_STORE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            toast_ttl,
            toast_capacity,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
