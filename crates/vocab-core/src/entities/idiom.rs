use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// A fixed multi-word expression.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IdiomEntry {
    pub id: String,
    pub name: String,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    pub meaning: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Vec<String>")]
    pub examples: Vec<String>,
    #[serde(default, with = "crate::timestamp::option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub last_reviewed: Option<DateTime<Utc>>,
}
