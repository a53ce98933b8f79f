//! Configuration management

use crate::error::{JotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "JOT_CONFIG";

/// Width listings wrap entry text to unless configured otherwise
pub const DEFAULT_WRAP_WIDTH: usize = 70;

const JOURNAL_FILE_NAME: &str = "jot.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_file: Option<PathBuf>,
    pub wrap_width: usize,
    pub expand: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_file: None,
            wrap_width: DEFAULT_WRAP_WIDTH,
            expand: false,
        }
    }
}

impl Config {
    /// Location of the config file: `$JOT_CONFIG`, else `<config dir>/jot/config.toml`
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|dir| dir.join("jot"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from a file, falling back to defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(JotError::Io(e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            JotError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.wrap_width == 0 {
            return Err(JotError::Config(
                "wrap_width must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the journal file: explicit override, then `journal_file`,
    /// then `<data dir>/jot/jot.txt`, then `./jot.txt`
    pub fn journal_path(&self, override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }
        if let Some(path) = &self.journal_file {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("jot").join(JOURNAL_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(JOURNAL_FILE_NAME))
    }
}
