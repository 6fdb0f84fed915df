use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A domain term. `context` names the field it belongs to (e.g. "networking")
/// and is always supplied at creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TerminologyEntry {
    pub id: String,
    pub name: String,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    pub context: Option<String>,
    pub meaning: Option<String>,
    pub example: Option<String>,
    #[serde(default, with = "crate::timestamp::option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub last_reviewed: Option<DateTime<Utc>>,
}
