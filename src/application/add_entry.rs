//! Add entry use case

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::JournalStore;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Service for appending entries to the journal
pub struct AddEntryService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> AddEntryService<S> {
    /// Create a new add entry service
    pub fn new(store: S) -> Self {
        AddEntryService { store }
    }

    /// Insert an entry after any existing entries for the same date and
    /// write the whole journal back.
    pub fn execute(&self, date: NaiveDate, text: &str) -> Result<JournalEntry> {
        let mut journal = self.store.load()?;

        let position = journal.insert(date, text);
        debug!("Inserted entry for {} at position {}", date, position);

        self.store.save(&journal)?;
        info!("Added entry for {} to {:?}", date, self.store.path());

        Ok(journal.entries()[position].clone())
    }
}
