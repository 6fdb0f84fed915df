//! Core error types.
//!
//! These cover failures that can be decided without touching the filesystem.
//! Store-level failures (malformed records, naming conflicts, lookups) are
//! defined in `vocab-store` and wrap this type.

use thiserror::Error;

use crate::enums::Category;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A creation input that has no default was not supplied.
    ///
    /// Raised for terminology entries created without a context.
    #[error("{category} entries require a {field}")]
    MissingRequiredInput {
        category: Category,
        field: &'static str,
    },

    /// Input failed validation (blank name, field not valid for the category).
    #[error("Validation error: {0}")]
    Validation(String),
}
