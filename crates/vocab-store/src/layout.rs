//! On-disk layout: project root, one directory per category, fixed extension.

use std::path::{Path, PathBuf};

use vocab_config::StoreConfig;
use vocab_core::enums::Category;
use vocab_core::slug::slugify;

/// Where records live. Built once from the project root and `StoreConfig`
/// and handed to `EntryStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    root: PathBuf,
    words: PathBuf,
    idioms: PathBuf,
    terminologies: PathBuf,
    extension: String,
}

impl StoreLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: &StoreConfig) -> Self {
        let root = root.into();
        Self {
            words: root.join(config.dir_name(Category::Word)),
            idioms: root.join(config.dir_name(Category::Idiom)),
            terminologies: root.join(config.dir_name(Category::Terminology)),
            extension: config.extension.clone(),
            root,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Directory holding records of `category`.
    #[must_use]
    pub fn dir_for(&self, category: Category) -> &Path {
        match category {
            Category::Word => &self.words,
            Category::Idiom => &self.idioms,
            Category::Terminology => &self.terminologies,
        }
    }

    /// Record path for `name` under `category`, keyed by its slug.
    #[must_use]
    pub fn path_for(&self, category: Category, name: &str) -> PathBuf {
        self.dir_for(category)
            .join(format!("{}.{}", slugify(name), self.extension))
    }

    /// Category whose directory directly contains `path`.
    #[must_use]
    pub fn category_of(&self, path: &Path) -> Option<Category> {
        let parent = path.parent()?;
        Category::ALL
            .into_iter()
            .find(|category| self.dir_for(*category) == parent)
    }

    /// Whether `path` carries the record extension.
    #[must_use]
    pub fn is_record_file(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(self.extension.as_str())
    }

    /// `path` relative to the root when possible, for display.
    #[must_use]
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
