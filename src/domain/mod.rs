//! Domain layer - Date resolution and the journal model

pub mod date_token;
pub mod journal;

pub use date_token::{resolve, Adjustment, DateToken, DATE_FORMAT};
pub use journal::{single_line, DateRange, Journal, JournalEntry};
