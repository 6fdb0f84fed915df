//! YAML record encoding.
//!
//! Decoding validates at the boundary: the document must be a mapping with a
//! known `type`, and the remaining keys must match that category's strict
//! field set. Encoding writes keys in the canonical record order
//! `id, name, type, created_at, <category fields>, last_reviewed` so that
//! successive saves of the same entry diff cleanly.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use vocab_core::entities::Entry;
use vocab_core::enums::Category;

use crate::error::StoreError;

const TYPE_KEY: &str = "type";
const LEADING_KEYS: [&str; 3] = ["id", "name", TYPE_KEY];

/// Decode a record read from `path`.
///
/// # Errors
///
/// Returns `StoreError::MalformedRecord` naming `path` if the text is not a
/// YAML mapping, has no recognizable `type`, or does not fit the category.
pub fn decode(raw: &str, path: &Path) -> Result<Entry, StoreError> {
    let value: Value = serde_yaml::from_str(raw).map_err(|e| StoreError::malformed(path, e))?;
    let Value::Mapping(mut fields) = value else {
        return Err(StoreError::malformed(path, "record is not a mapping"));
    };

    let category = match fields.remove(TYPE_KEY) {
        Some(Value::String(tag)) => tag
            .parse::<Category>()
            .map_err(|e| StoreError::malformed(path, e))?,
        Some(_) => return Err(StoreError::malformed(path, "'type' must be a string")),
        None => return Err(StoreError::malformed(path, "missing 'type'")),
    };

    let rest = Value::Mapping(fields);
    let entry = match category {
        Category::Word => serde_yaml::from_value(rest).map(Entry::Word),
        Category::Idiom => serde_yaml::from_value(rest).map(Entry::Idiom),
        Category::Terminology => serde_yaml::from_value(rest).map(Entry::Terminology),
    }
    .map_err(|e| StoreError::malformed(path, format!("invalid {category} record: {e}")))?;

    Ok(entry)
}

/// Encode an entry as a YAML record in canonical key order.
///
/// # Errors
///
/// Returns `StoreError::Encode` if serialization fails.
pub fn encode(entry: &Entry) -> Result<String, StoreError> {
    let value = match serde_yaml::to_value(entry)? {
        Value::Mapping(fields) => Value::Mapping(canonical_order(fields)),
        other => other,
    };
    Ok(serde_yaml::to_string(&value)?)
}

fn canonical_order(fields: Mapping) -> Mapping {
    let mut ordered = Mapping::with_capacity(fields.len());
    for key in LEADING_KEYS {
        if let Some(value) = fields.get(key) {
            ordered.insert(Value::from(key), value.clone());
        }
    }
    for (key, value) in fields {
        let leading = key.as_str().is_some_and(|k| LEADING_KEYS.contains(&k));
        if !leading {
            ordered.insert(key, value);
        }
    }
    ordered
}
