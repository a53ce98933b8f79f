//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_add_words, parse_list_words, Cli, Commands};
pub use output::{format_entry_list, wrap_text};
