//! Record directory layout configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vocab_core::enums::Category;

use crate::error::ConfigError;

fn default_words_dir() -> String {
    "words".into()
}

fn default_idioms_dir() -> String {
    "idioms".into()
}

fn default_terminologies_dir() -> String {
    "terminologies".into()
}

fn default_extension() -> String {
    "yaml".into()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory (relative to the project root) holding word records.
    #[serde(default = "default_words_dir")]
    pub words_dir: String,

    /// Directory holding idiom records.
    #[serde(default = "default_idioms_dir")]
    pub idioms_dir: String,

    /// Directory holding terminology records.
    #[serde(default = "default_terminologies_dir")]
    pub terminologies_dir: String,

    /// Record file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            words_dir: default_words_dir(),
            idioms_dir: default_idioms_dir(),
            terminologies_dir: default_terminologies_dir(),
            extension: default_extension(),
        }
    }
}

impl StoreConfig {
    /// Directory name configured for `category`.
    #[must_use]
    pub fn dir_name(&self, category: Category) -> &str {
        match category {
            Category::Word => &self.words_dir,
            Category::Idiom => &self.idioms_dir,
            Category::Terminology => &self.terminologies_dir,
        }
    }

    /// Reject layouts that would mix categories or escape the project root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("store.words_dir", &self.words_dir),
            ("store.idioms_dir", &self.idioms_dir),
            ("store.terminologies_dir", &self.terminologies_dir),
        ];

        let mut seen: Vec<Vec<&str>> = Vec::with_capacity(fields.len());
        for (field, value) in fields {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
            let path = Path::new(trimmed);
            if trimmed.starts_with(['/', '\\']) || path.is_absolute() || path.has_root() {
                return Err(invalid(field, "must be relative to the project root"));
            }
            let parts = dir_components(trimmed);
            if parts.iter().any(|part| *part == "..") {
                return Err(invalid(field, "must stay inside the project root"));
            }
            if parts.is_empty() {
                return Err(invalid(field, "must name a directory below the project root"));
            }
            if seen.contains(&parts) {
                return Err(invalid(field, "is shared with another category"));
            }
            seen.push(parts);
        }

        if self.extension.is_empty() {
            return Err(invalid("store.extension", "must not be empty"));
        }
        if self.extension.contains(['.', '/', '\\']) {
            return Err(invalid(
                "store.extension",
                "must not contain '.' or path separators",
            ));
        }

        Ok(())
    }
}

/// Path segments of a configured directory, ignoring `.` and empty segments.
fn dir_components(dir: &str) -> Vec<&str> {
    dir.split(['/', '\\'])
        .filter(|part| !part.is_empty() && *part != ".")
        .collect()
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
