//! Config management use case

use crate::error::{JotError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

const VALID_KEYS: &str = "journal_file, wrap_width, expand";

/// Service for reading and editing the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the config file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from(&self.path)?;

        match key {
            "journal_file" => Ok(config
                .journal_file
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "wrap_width" => Ok(config.wrap_width.to_string()),
            "expand" => Ok(config.expand.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from(&self.path)?;

        match key {
            "journal_file" => {
                config.journal_file = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "wrap_width" => {
                config.wrap_width = value.parse().map_err(|_| {
                    JotError::Config(format!(
                        "Invalid wrap_width: '{}'. Expected a positive integer",
                        value
                    ))
                })?;
            }
            "expand" => {
                config.expand = value.parse().map_err(|_| {
                    JotError::Config(format!(
                        "Invalid expand: '{}'. Expected true or false",
                        value
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }

        config.validate()?;
        config.save_to(&self.path)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from(&self.path)
    }
}

fn unknown_key(key: &str) -> JotError {
    JotError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
