//! File system journal store

use crate::domain::Journal;
use crate::error::{JotError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstract persistence for the journal
pub trait JournalStore {
    /// Location of the persisted journal
    fn path(&self) -> &Path;

    /// Load the whole journal; a missing store yields an empty journal
    fn load(&self) -> Result<Journal>;

    /// Overwrite the persisted journal with `journal`
    fn save(&self, journal: &Journal) -> Result<()>;
}

/// Plain-text journal file, one `yyyy-mm-dd : <text>` line per entry
#[derive(Debug, Clone)]
pub struct FileJournalStore {
    pub path: PathBuf,
}

impl FileJournalStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        FileJournalStore { path }
    }

    /// Check if the journal file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl JournalStore for FileJournalStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Journal> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No journal at {:?}, starting empty", self.path);
                return Ok(Journal::new());
            }
            Err(e) => return Err(JotError::Io(e)),
        };

        let journal = Journal::parse(&contents)?;
        debug!("Loaded {} entries from {:?}", journal.len(), self.path);
        Ok(journal)
    }

    fn save(&self, journal: &Journal) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, journal.to_text())?;
        debug!("Saved {} entries to {:?}", journal.len(), self.path);
        Ok(())
    }
}
