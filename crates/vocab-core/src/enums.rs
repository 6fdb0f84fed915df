//! Category, lifecycle status, and report bucket enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Category` is the only one persisted in records; the others are derived on
//! every read and never stored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Kind of vocabulary entry. Fixed at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Word,
    Idiom,
    Terminology,
}

impl Category {
    /// All categories in lookup precedence order.
    pub const ALL: [Self; 3] = [Self::Word, Self::Idiom, Self::Terminology];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Idiom => "idiom",
            Self::Terminology => "terminology",
        }
    }

    /// Fields that must be non-empty before an entry of this category is promoted,
    /// in canonical record order.
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Word => &["part_of_speech", "meaning", "examples"],
            Self::Idiom => &["meaning", "examples"],
            Self::Terminology => &["context", "meaning", "example"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown entry type '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// EntryStatus
// ---------------------------------------------------------------------------

/// Completion status of an entry, ignoring due-ness.
///
/// ```text
/// stub → promoted_unreviewed → promoted_reviewed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Stub,
    PromotedUnreviewed,
    PromotedReviewed,
}

impl EntryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stub => "stub",
            Self::PromotedUnreviewed => "promoted_unreviewed",
            Self::PromotedReviewed => "promoted_reviewed",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Bucket
// ---------------------------------------------------------------------------

/// Status report bucket. Every entry lands in exactly one, checked in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Due,
    Promoted,
    Stub,
}

impl Bucket {
    /// Buckets in classification precedence order.
    pub const ALL: [Self; 3] = [Self::Due, Self::Promoted, Self::Stub];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Due => "due",
            Self::Promoted => "promoted",
            Self::Stub => "stub",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
