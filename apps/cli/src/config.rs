//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override both.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::cli::Cli;
use stock_db::DEFAULT_DB_PATH;

/// Environment variable naming the database file.
pub const DB_PATH_VAR: &str = "STOCK_DB_PATH";

/// Environment variable disabling screen clearing (`true` / `false`).
pub const PLAIN_TERMINAL_VAR: &str = "STOCK_PLAIN_TERMINAL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file
    pub db_path: PathBuf,

    /// Skip ANSI screen clearing
    pub plain_terminal: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            plain_terminal: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        AppConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let db_path = match lookup(DB_PATH_VAR) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(DB_PATH_VAR.to_string()))
            }
            Some(path) => PathBuf::from(path),
            None => defaults.db_path,
        };

        let plain_terminal = match lookup(PLAIN_TERMINAL_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue(PLAIN_TERMINAL_VAR.to_string()))?,
            None => defaults.plain_terminal,
        };

        Ok(AppConfig {
            db_path,
            plain_terminal,
        })
    }

    /// Applies command-line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.db {
            self.db_path = path.clone();
        }
        if cli.plain {
            self.plain_terminal = true;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
