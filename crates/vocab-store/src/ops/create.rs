//! Entry creation: build a stub and persist it without clobbering.

use chrono::{DateTime, Utc};
use tracing::info;
use vocab_core::create::{NewEntry, create_stub};

use crate::error::StoreError;
use crate::service::VocabService;
use crate::store::StoredEntry;

impl VocabService {
    /// Create a stub from `new` and write it to its slug path.
    ///
    /// Validation runs before anything touches the disk, so a rejected input
    /// writes nothing.
    ///
    /// # Errors
    ///
    /// - `StoreError::Core` for invalid input (blank name, missing context).
    /// - `StoreError::NamingConflict` if a record with the same slug already
    ///   exists in the category; that record is not modified.
    pub fn create_entry(
        &self,
        new: NewEntry,
        now: DateTime<Utc>,
    ) -> Result<StoredEntry, StoreError> {
        let entry = create_stub(new, now)?;
        let path = self.store().insert(&entry)?;
        info!(
            category = %entry.category(),
            name = entry.name(),
            path = %self.display_path(&path),
            "created stub"
        );
        Ok(StoredEntry { path, entry })
    }
}
