// Runtime configuration, read from the process environment (and `.env` via dotenvy in main).
//
// ROSTER_STORAGE_DIR       directory holding the persisted entries   (default ./.roster-data)
// ROSTER_LOGIN_LATENCY_MS  simulated sign-in delay in milliseconds    (default 800)

use crate::modules::session::store::DEFAULT_LOGIN_LATENCY;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const STORAGE_DIR_VAR: &str = "ROSTER_STORAGE_DIR";
pub const LOGIN_LATENCY_VAR: &str = "ROSTER_LOGIN_LATENCY_MS";
pub const DEFAULT_STORAGE_DIR: &str = "./.roster-data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidLatency { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_dir: PathBuf,
    pub login_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            login_latency: DEFAULT_LOGIN_LATENCY,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup(STORAGE_DIR_VAR) {
            if dir.trim().is_empty() {
                return Err(ConfigError::Empty(STORAGE_DIR_VAR));
            }
            config.storage_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(LOGIN_LATENCY_VAR) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidLatency {
                    var: LOGIN_LATENCY_VAR,
                    value: raw.clone(),
                })?;
            config.login_latency = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
