//! List entries use case

use crate::domain::{DateRange, JournalEntry};
use crate::error::Result;
use crate::infrastructure::JournalStore;
use tracing::debug;

/// Service for reading entries back out of the journal. Never saves.
pub struct ListEntriesService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> ListEntriesService<S> {
    /// Create a new list entries service
    pub fn new(store: S) -> Self {
        ListEntriesService { store }
    }

    /// Entries within `range`, in journal order
    pub fn execute(&self, range: DateRange) -> Result<Vec<JournalEntry>> {
        let journal = self.store.load()?;
        let entries: Vec<JournalEntry> = journal.within(range).cloned().collect();
        debug!(
            "{} of {} entries match {:?}",
            entries.len(),
            journal.len(),
            range
        );
        Ok(entries)
    }
}
