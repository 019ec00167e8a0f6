//! Configuration management for the rolodex.
//!
//! This module handles loading and validating configuration from environment
//! variables. All settings are optional and have sensible defaults, so the
//! program runs with no environment at all.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Default lookahead for the `birthdays` command, in days.
const DEFAULT_HORIZON_DAYS: u64 = 7;

/// Configuration for the rolodex.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the contacts file
    pub data_file: PathBuf,

    /// Lookahead window for the `birthdays` command, in days (default: 7)
    pub birthday_horizon_days: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_DATA_FILE`: contacts file path (default: the platform
    ///   data directory, falling back to `./contacts.json`)
    /// - `ROLODEX_BIRTHDAY_HORIZON_DAYS`: birthdays lookahead in days
    ///   (default: 7, must be 1..=366)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("ROLODEX_DATA_FILE") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => Self::default_data_file(),
        };

        let birthday_horizon_days =
            Self::parse_env_u64("ROLODEX_BIRTHDAY_HORIZON_DAYS", DEFAULT_HORIZON_DAYS)?;
        if !(1..=366).contains(&birthday_horizon_days) {
            return Err(ConfigError::InvalidValue {
                var: "ROLODEX_BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            birthday_horizon_days,
            log_level,
        })
    }

    /// The contacts file location when `ROLODEX_DATA_FILE` is not set:
    /// the platform data directory, or the working directory when no
    /// home is resolvable.
    fn default_data_file() -> PathBuf {
        match ProjectDirs::from("com", "rolodex", "rolodex") {
            Some(dirs) => dirs.data_dir().join("contacts.json"),
            None => PathBuf::from("contacts.json"),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: Self::default_data_file(),
            birthday_horizon_days: DEFAULT_HORIZON_DAYS,
            log_level: "error".to_string(),
        }
    }
}
