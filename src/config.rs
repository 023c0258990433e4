//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the contacts file.
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Default number of records per page for `show iterated`.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted (default: contacts.json)
    pub contacts_file: PathBuf,

    /// Records per page when no size is given (default: 5)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path of the contacts file (default: contacts.json)
    /// - `PAGE_SIZE`: Records per page (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_CONTACTS_FILE),
        };

        let page_size = Self::parse_env_usize("PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contacts_file,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "error".to_string(),
        }
    }
}
