//! jot - A command-line journal for simple daily records
//!
//! Entries are dated lines of free text kept in one date-ordered plain-text
//! file. Dates can be given as `yyyy-mm-dd` or as relative keywords such as
//! `yesterday`, `last-month` or `3-days-ago`.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JotError;
