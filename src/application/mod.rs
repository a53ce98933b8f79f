//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod intent;
pub mod list_entries;
pub mod manage_config;

pub use add_entry::AddEntryService;
pub use intent::{Command, Intent, Mode};
pub use list_entries::ListEntriesService;
pub use manage_config::ConfigService;
