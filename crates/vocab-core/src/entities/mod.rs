//! Entry structs for the three vocabulary categories.
//!
//! Each category owns a strict field set (`deny_unknown_fields`), and `Entry`
//! tags them on `type`. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for record roundtrip and schema export.

mod idiom;
mod terminology;
mod word;

pub use idiom::IdiomEntry;
pub use terminology::TerminologyEntry;
pub use word::WordEntry;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::Category;
use crate::slug::slugify;

/// A vocabulary record of any category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    Word(WordEntry),
    Idiom(IdiomEntry),
    Terminology(TerminologyEntry),
}

macro_rules! common_field {
    ($self:ident, $field:ident) => {
        match $self {
            Self::Word(entry) => &entry.$field,
            Self::Idiom(entry) => &entry.$field,
            Self::Terminology(entry) => &entry.$field,
        }
    };
}

impl Entry {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Word(_) => Category::Word,
            Self::Idiom(_) => Category::Idiom,
            Self::Terminology(_) => Category::Terminology,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        common_field!(self, id)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        common_field!(self, name)
    }

    /// Storage key derived from the name.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(self.name())
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        *common_field!(self, created_at)
    }

    #[must_use]
    pub fn last_reviewed(&self) -> Option<DateTime<Utc>> {
        *common_field!(self, last_reviewed)
    }

    #[must_use]
    pub fn meaning(&self) -> Option<&str> {
        common_field!(self, meaning).as_deref()
    }

    /// Stamp the entry as reviewed at `now`.
    pub fn mark_reviewed(&mut self, now: DateTime<Utc>) {
        let slot = match self {
            Self::Word(entry) => &mut entry.last_reviewed,
            Self::Idiom(entry) => &mut entry.last_reviewed,
            Self::Terminology(entry) => &mut entry.last_reviewed,
        };
        *slot = Some(now);
    }
}

/// Read a list that may be written as `null` (an emptied YAML key) as empty.
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(d)?.unwrap_or_default())
}
