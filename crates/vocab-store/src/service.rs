//! Service layer for the vocab workflows.
//!
//! `VocabService` wraps an `EntryStore`. The workflows live as
//! `impl VocabService` blocks under `ops/`, one module per command. Every
//! method that looks at due-ness or writes a timestamp takes `now` from the
//! caller.

use crate::layout::StoreLayout;
use crate::store::EntryStore;

pub struct VocabService {
    store: EntryStore,
}

impl VocabService {
    #[must_use]
    pub const fn new(store: EntryStore) -> Self {
        Self { store }
    }

    /// Build a service over a store with the given layout.
    #[must_use]
    pub const fn from_layout(layout: StoreLayout) -> Self {
        Self::new(EntryStore::new(layout))
    }

    #[must_use]
    pub const fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Path for display, relative to the project root.
    pub(crate) fn display_path(&self, path: &std::path::Path) -> String {
        self.store.layout().display_path(path)
    }
}
