//! File-backed entry store: one YAML record per entry, one directory per
//! category.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vocab_core::entities::Entry;
use vocab_core::enums::Category;
use vocab_core::responses::SkippedRecord;

use crate::codec;
use crate::error::StoreError;
use crate::layout::StoreLayout;

/// An entry together with the file it was read from or written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub path: PathBuf,
    pub entry: Entry,
}

/// Result of reading every record in scope. Failures are isolated per file.
#[derive(Debug, Default)]
pub struct Scan {
    pub entries: Vec<StoredEntry>,
    pub skipped: Vec<SkippedRecord>,
}

pub struct EntryStore {
    layout: StoreLayout,
}

impl EntryStore {
    #[must_use]
    pub const fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub const fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Read and decode the record at `path`.
    ///
    /// A record sitting in a category directory must carry that category's
    /// `type`.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the file cannot be read, `StoreError::MalformedRecord`
    /// if it does not decode or its type disagrees with its directory.
    pub fn load(&self, path: &Path) -> Result<Entry, StoreError> {
        let raw = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let entry = codec::decode(&raw, path)?;
        if let Some(expected) = self.layout.category_of(path) {
            if entry.category() != expected {
                return Err(StoreError::malformed(
                    path,
                    format!(
                        "type '{}' does not belong in the {expected} directory",
                        entry.category()
                    ),
                ));
            }
        }
        Ok(entry)
    }

    /// Overwrite the record at `path` with `entry`.
    ///
    /// # Errors
    ///
    /// `StoreError::Encode` or `StoreError::Io`.
    pub fn save(&self, path: &Path, entry: &Entry) -> Result<(), StoreError> {
        let text = codec::encode(entry)?;
        fs::write(path, text).map_err(|e| StoreError::io(path, e))?;
        debug!(path = %path.display(), name = entry.name(), "saved record");
        Ok(())
    }

    /// Write a new record at its slug path, refusing to replace an existing one.
    ///
    /// # Errors
    ///
    /// `StoreError::NamingConflict` if the target exists (it is left as is),
    /// otherwise `StoreError::Encode` or `StoreError::Io`.
    pub fn insert(&self, entry: &Entry) -> Result<PathBuf, StoreError> {
        let dir = self.layout.dir_for(entry.category());
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        let path = self.layout.path_for(entry.category(), entry.name());
        let text = codec::encode(entry)?;

        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StoreError::NamingConflict {
                    name: entry.name().to_string(),
                    path,
                });
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };
        write_new_record(file, &path, text.as_bytes())?;

        debug!(path = %path.display(), name = entry.name(), "created record");
        Ok(path)
    }

    /// Every record file, grouped by category in precedence order and sorted
    /// by file name within each.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if a category directory exists but cannot be listed.
    pub fn list_all(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut paths = Vec::new();
        for category in Category::ALL {
            paths.extend(self.list_category(category)?);
        }
        Ok(paths)
    }

    /// Record files of one category, sorted by file name. A missing
    /// directory holds no records.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the directory cannot be listed.
    pub fn list_category(&self, category: Category) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.layout.dir_for(category);
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(dir, e)),
        };

        let mut paths = Vec::new();
        for dir_entry in read_dir {
            let path = dir_entry.map_err(|e| StoreError::io(dir, e))?.path();
            if path.is_file() && self.layout.is_record_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Find the record for `name`, checking categories in precedence order.
    #[must_use]
    pub fn resolve_by_name(&self, name: &str) -> Option<PathBuf> {
        let mut matches = Category::ALL
            .into_iter()
            .map(|category| self.layout.path_for(category, name))
            .filter(|path| path.is_file());

        let first = matches.next()?;
        let shadowed: Vec<_> = matches.map(|p| p.display().to_string()).collect();
        if !shadowed.is_empty() {
            debug!(
                name,
                resolved = %first.display(),
                ?shadowed,
                "name matches records in several categories, using the first"
            );
        }
        Some(first)
    }

    /// Like `resolve_by_name`, but absence is an error.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no category holds `name`.
    pub fn require_by_name(&self, name: &str) -> Result<PathBuf, StoreError> {
        self.resolve_by_name(name)
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    /// Load every record, optionally limited to one category. Unreadable or
    /// malformed files are logged and reported in `Scan::skipped`.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` only if a category directory cannot be listed.
    pub fn load_all(&self, category: Option<Category>) -> Result<Scan, StoreError> {
        let paths = match category {
            Some(category) => self.list_category(category)?,
            None => self.list_all()?,
        };

        let mut scan = Scan::default();
        for path in paths {
            match self.load(&path) {
                Ok(entry) => scan.entries.push(StoredEntry { path, entry }),
                Err(e) => {
                    debug!("skipping {e}");
                    scan.skipped.push(SkippedRecord {
                        path: self.layout.display_path(&path),
                        reason: skip_reason(e),
                    });
                }
            }
        }
        Ok(scan)
    }
}

/// Fill a freshly created record file. On failure the file is removed again.
fn write_new_record(mut out: impl Write, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Err(e) = out.write_all(bytes).and_then(|()| out.flush()) {
        drop(out);
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), "failed to remove partial record: {cleanup}");
        }
        return Err(StoreError::io(path, e));
    }
    Ok(())
}

/// Reason text for a skipped record, without the path already shown beside it.
pub(crate) fn skip_reason(error: StoreError) -> String {
    match error {
        StoreError::MalformedRecord { reason, .. } => reason,
        StoreError::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use vocab_config::StoreConfig;
    use vocab_core::create::{NewEntry, create_stub};

    use super::*;

    fn store() -> (TempDir, EntryStore) {
        let tmp = TempDir::new().unwrap();
        let layout = StoreLayout::new(tmp.path(), &StoreConfig::default());
        (tmp, EntryStore::new(layout))
    }

    fn stub(category: Category, name: &str) -> Entry {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut new = NewEntry::new(category, name);
        if category == Category::Terminology {
            new = new.with_context("general");
        }
        create_stub(new, now).unwrap()
    }

    #[test]
    fn insert_then_load() {
        let (_tmp, store) = store();
        let entry = stub(Category::Word, "Serendipity");
        let path = store.insert(&entry).unwrap();
        assert!(path.ends_with("words/serendipity.yaml"));
        assert_eq!(store.load(&path).unwrap(), entry);
    }

    #[test]
    fn insert_refuses_to_overwrite() {
        let (_tmp, store) = store();
        let first = stub(Category::Idiom, "spill the beans");
        let path = store.insert(&first).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let second = stub(Category::Idiom, "Spill the Beans");
        let err = store.insert(&second).unwrap_err();
        assert!(matches!(err, StoreError::NamingConflict { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_insert_write_leaves_no_partial_record() {
        let (tmp, store) = store();
        let entry = stub(Category::Word, "ephemeral");
        fs::create_dir_all(tmp.path().join("words")).unwrap();
        let path = store.layout().path_for(Category::Word, "ephemeral");
        fs::write(&path, "id: trunc").unwrap();

        let err = write_new_record(FailingWriter, &path, b"id: x\n").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!path.exists());

        assert_eq!(store.insert(&entry).unwrap(), path);
        assert_eq!(store.load(&path).unwrap(), entry);
    }

    #[test]
    fn list_all_skips_missing_dirs_and_foreign_files() {
        let (tmp, store) = store();
        store.insert(&stub(Category::Terminology, "latency")).unwrap();
        store.insert(&stub(Category::Word, "zeal")).unwrap();
        store.insert(&stub(Category::Word, "aplomb")).unwrap();
        fs::write(tmp.path().join("words/notes.txt"), "scratch").unwrap();
        fs::create_dir_all(tmp.path().join("words/nested.yaml")).unwrap();

        let names: Vec<_> = store
            .list_all()
            .unwrap()
            .iter()
            .map(|p| store.layout().display_path(p))
            .collect();
        let expected: Vec<_> = [
            Path::new("words").join("aplomb.yaml"),
            Path::new("words").join("zeal.yaml"),
            Path::new("terminologies").join("latency.yaml"),
        ]
        .iter()
        .map(|p| p.display().to_string())
        .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn resolve_by_name_normalizes_and_prefers_word() {
        let (_tmp, store) = store();
        let idiom_path = store.insert(&stub(Category::Idiom, "Hit the Road")).unwrap();
        assert_eq!(store.resolve_by_name("hit the road"), Some(idiom_path));

        let word_path = store.insert(&stub(Category::Word, "HIT THE ROAD")).unwrap();
        assert_eq!(store.resolve_by_name("Hit the Road"), Some(word_path));
        assert_eq!(store.resolve_by_name("hit the bricks"), None);
    }

    #[test]
    fn require_by_name_reports_not_found() {
        let (_tmp, store) = store();
        let err = store.require_by_name("ghost").unwrap_err();
        assert_eq!(err.to_string(), "Entry not found: ghost");
    }

    #[test]
    fn load_all_isolates_malformed_records() {
        let (tmp, store) = store();
        store.insert(&stub(Category::Word, "quixotic")).unwrap();
        fs::write(tmp.path().join("words/broken.yaml"), "name: [unclosed").unwrap();
        fs::write(tmp.path().join("words/list.yaml"), "- a\n- b\n").unwrap();

        let scan = store.load_all(None).unwrap();
        assert_eq!(scan.entries.len(), 1);
        assert_eq!(scan.entries[0].entry.name(), "quixotic");
        let skipped: Vec<_> = scan.skipped.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(
            skipped,
            vec![
                Path::new("words").join("broken.yaml").display().to_string(),
                Path::new("words").join("list.yaml").display().to_string(),
            ]
        );
    }

    #[test]
    fn load_rejects_record_in_wrong_directory() {
        let (tmp, store) = store();
        let entry = stub(Category::Idiom, "cold feet");
        let path = store.insert(&entry).unwrap();
        fs::create_dir_all(tmp.path().join("words")).unwrap();
        let moved = tmp.path().join("words/cold-feet.yaml");
        fs::rename(&path, &moved).unwrap();

        let err = store.load(&moved).unwrap_err();
        assert!(err.to_string().contains("does not belong in the word directory"));
    }

    #[test]
    fn load_all_filters_by_category() {
        let (_tmp, store) = store();
        store.insert(&stub(Category::Word, "aplomb")).unwrap();
        store.insert(&stub(Category::Idiom, "cold feet")).unwrap();

        let scan = store.load_all(Some(Category::Idiom)).unwrap();
        assert_eq!(scan.entries.len(), 1);
        assert_eq!(scan.entries[0].entry.category(), Category::Idiom);
    }
}
