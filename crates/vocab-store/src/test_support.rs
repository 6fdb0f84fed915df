//! Shared test utilities for vocab-store unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::{DateTime, Utc};
    use tempfile::TempDir;
    use vocab_config::StoreConfig;
    use vocab_core::create::NewEntry;
    use vocab_core::enums::Category;

    use crate::layout::StoreLayout;
    use crate::service::VocabService;
    use crate::store::StoredEntry;

    /// A service over a fresh temp directory with the default layout.
    /// Keep the `TempDir` alive for the duration of the test.
    pub fn test_service() -> (TempDir, VocabService) {
        let tmp = TempDir::new().unwrap();
        let layout = StoreLayout::new(tmp.path(), &StoreConfig::default());
        (tmp, VocabService::from_layout(layout))
    }

    /// Create a word stub with no optional fields.
    pub fn stub_word(svc: &VocabService, name: &str, now: DateTime<Utc>) -> StoredEntry {
        svc.create_entry(NewEntry::new(Category::Word, name), now)
            .unwrap()
    }

    /// Create an idiom with every required field, never reviewed.
    pub fn filled_idiom(svc: &VocabService, name: &str, now: DateTime<Utc>) -> StoredEntry {
        svc.create_entry(
            NewEntry::new(Category::Idiom, name)
                .with_meaning("a meaning")
                .with_example(format!("An example using {name}.")),
            now,
        )
        .unwrap()
    }
}
