//! Stub construction for new entries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Entry, IdiomEntry, TerminologyEntry, WordEntry};
use crate::enums::Category;
use crate::errors::CoreError;

/// Inputs accepted when creating an entry. Everything except `category` and
/// `name` may be left out and filled in by editing the record later, except a
/// terminology's `context`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub category: Option<Category>,
    pub name: String,
    pub example: Option<String>,
    pub context: Option<String>,
    pub meaning: Option<String>,
    pub part_of_speech: Option<String>,
}

impl NewEntry {
    #[must_use]
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self {
            category: Some(category),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    #[must_use]
    pub fn with_part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = Some(part_of_speech.into());
        self
    }
}

/// Build a stub entry stamped at `now` with a fresh id.
///
/// # Errors
///
/// - `CoreError::Validation` if no category is set, the name is blank, or a
///   part of speech is given for a non-word.
/// - `CoreError::MissingRequiredInput` if a terminology has no context.
pub fn create_stub(new: NewEntry, now: DateTime<Utc>) -> Result<Entry, CoreError> {
    let category = new
        .category
        .ok_or_else(|| CoreError::Validation("entry type is required".into()))?;
    let name = new.name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }

    let example = non_blank(new.example);
    let meaning = non_blank(new.meaning);
    let part_of_speech = non_blank(new.part_of_speech);
    if part_of_speech.is_some() && category != Category::Word {
        return Err(CoreError::Validation(format!(
            "part_of_speech does not apply to {category} entries"
        )));
    }

    let id = Uuid::new_v4().to_string();
    let name = name.to_string();

    let entry = match category {
        Category::Word => Entry::Word(WordEntry {
            id,
            name,
            created_at: now,
            part_of_speech,
            meaning,
            examples: example.into_iter().collect(),
            last_reviewed: None,
        }),
        Category::Idiom => Entry::Idiom(IdiomEntry {
            id,
            name,
            created_at: now,
            meaning,
            examples: example.into_iter().collect(),
            last_reviewed: None,
        }),
        Category::Terminology => {
            let context = non_blank(new.context).ok_or(CoreError::MissingRequiredInput {
                category,
                field: "context",
            })?;
            Entry::Terminology(TerminologyEntry {
                id,
                name,
                created_at: now,
                context: Some(context),
                meaning,
                example,
                last_reviewed: None,
            })
        }
    };

    Ok(entry)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
