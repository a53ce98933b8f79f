//! Error types for jot

use thiserror::Error;

/// Main error type for jot application
#[derive(Debug, Error)]
pub enum JotError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Malformed journal line {line}: {content}")]
    MalformedEntry { line: usize, content: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JotError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotError::Usage(_) => 2,
            JotError::InvalidDate(_) => 3,
            JotError::MalformedEntry { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JotError::InvalidDate(msg) => {
                format!(
                    "Invalid date: {}\n\n\
                    Numeric dates must exist on the calendar:\n\
                    • day-N uses a day of the current month (e.g., day-15)\n\
                    • month-N keeps today's day in month N (e.g., month-3)\n\
                    • year-N keeps today's month and day in year N\n\
                    • N-days-ago counts back N days (e.g., 5-days-ago)",
                    msg
                )
            }
            JotError::Usage(msg) => {
                format!(
                    "{}\n\n\
                    Usage:\n\
                    jot add [for] <date> \"<entry>\"\n\
                    jot add \"<entry>\"\n\
                    jot [-x] list all\n\
                    jot [-x] list [for] <date>\n\
                    jot [-x] list from <fromdate> [to <todate>] [inc|inclusive]",
                    msg
                )
            }
            JotError::MalformedEntry { line, content } => {
                format!(
                    "Malformed journal line {}: '{}'\n\n\
                    Each line must look like: yyyy-mm-dd : <entry text>",
                    line, content
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JotError
pub type Result<T> = std::result::Result<T, JotError>;
