//! Structured request produced by the argument layer

use crate::domain::{resolve, single_line, DateRange};
use crate::error::{JotError, Result};
use chrono::NaiveDate;

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Add,
    List,
}

/// Unresolved request: raw date tokens plus options
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Intent {
    pub mode: Mode,
    pub date_token: Option<String>,
    pub from_token: Option<String>,
    pub to_token: Option<String>,
    pub all: bool,
    pub inclusive: bool,
    pub expand: bool,
    pub entry_text: Option<String>,
}

/// Request with every date resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { date: NaiveDate, text: String },
    List { range: DateRange },
}

impl Intent {
    /// Resolve date tokens against `today` and apply defaults.
    ///
    /// An absent date token means today. `all` drops both bounds and `from`
    /// without `to` has no upper bound. A plain date (`list [for] <date>`)
    /// lists that one day only, not everything from that date onward.
    pub fn resolve(&self, today: NaiveDate) -> Result<Command> {
        let date = resolve(self.date_token.as_deref().unwrap_or("today"), today)?;

        match self.mode {
            Mode::Add => {
                let text = single_line(self.entry_text.as_deref().unwrap_or(""));
                if text.is_empty() {
                    return Err(JotError::Usage("Missing entry text".to_string()));
                }
                Ok(Command::Add { date, text })
            }
            Mode::List => {
                let range = if self.all {
                    DateRange::all()
                } else if let Some(from) = self.from_token.as_deref() {
                    DateRange {
                        from: Some(resolve(from, today)?),
                        to: self
                            .to_token
                            .as_deref()
                            .map(|to| resolve(to, today))
                            .transpose()?,
                        inclusive: self.inclusive,
                    }
                } else {
                    DateRange::single(date)
                };
                Ok(Command::List { range })
            }
        }
    }
}
