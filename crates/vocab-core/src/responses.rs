//! Response types returned by `vocab` commands.
//!
//! These structs define the shape of JSON output for `vocab add`,
//! `vocab mark-reviewed`, `vocab review`, and `vocab status`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Entry;
use crate::enums::{Bucket, Category};

/// A record file that could not be read during a scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedRecord {
    pub path: String,
    pub reason: String,
}

/// Response from `vocab add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateResponse {
    pub entry: Entry,
    pub path: String,
}

/// How `vocab mark-reviewed` chose its entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkMode {
    /// Explicit names, no due check.
    Targeted,
    /// Every entry currently due.
    Batch,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MarkedEntry {
    pub name: String,
    pub category: Category,
    pub path: String,
    #[schemars(with = "DateTime<Utc>")]
    #[serde(with = "crate::timestamp")]
    pub last_reviewed: DateTime<Utc>,
}

/// Response from `vocab mark-reviewed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MarkReviewedResponse {
    pub mode: MarkMode,
    /// Interval used to select due entries; absent in targeted mode.
    pub interval_days: Option<u32>,
    pub marked: Vec<MarkedEntry>,
    pub not_found: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewItem {
    /// 1-based position in the shown list.
    pub index: u32,
    pub path: String,
    pub entry: Entry,
}

/// Response from `vocab review`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewResponse {
    pub interval_days: u32,
    /// Records loaded from the store, due or not.
    pub total_entries: u32,
    /// Number of due entries before the display limit.
    pub total_due: u32,
    /// Display limit applied; absent when unlimited.
    pub limit: Option<u32>,
    pub truncated: bool,
    pub entries: Vec<ReviewItem>,
    pub skipped: Vec<SkippedRecord>,
}

/// One line of a status report section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusItem {
    pub name: String,
    pub category: Category,
    pub path: String,
    #[schemars(with = "Option<DateTime<Utc>>")]
    #[serde(default, with = "crate::timestamp::option")]
    pub last_reviewed: Option<DateTime<Utc>>,
    /// Required fields still empty; only populated for stubs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BucketCounts {
    pub due: u32,
    pub promoted: u32,
    pub stub: u32,
}

impl BucketCounts {
    #[must_use]
    pub const fn total(self) -> u32 {
        self.due + self.promoted + self.stub
    }

    #[must_use]
    pub const fn get(self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::Due => self.due,
            Bucket::Promoted => self.promoted,
            Bucket::Stub => self.stub,
        }
    }
}

/// One bucket of a status report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusSection {
    pub bucket: Bucket,
    pub items: Vec<StatusItem>,
}

/// Response from `vocab status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub interval_days: u32,
    /// Category filter applied before bucketing.
    pub category: Option<Category>,
    /// Bucket filter applied to the sections.
    pub bucket: Option<Bucket>,
    /// Counts over every bucket, regardless of the bucket filter.
    pub counts: BucketCounts,
    pub total: u32,
    /// Sections in display order: stub, due, promoted.
    pub sections: Vec<StatusSection>,
    pub skipped: Vec<SkippedRecord>,
}

impl StatusResponse {
    /// Section for `bucket`, if the report includes it.
    #[must_use]
    pub fn section(&self, bucket: Bucket) -> Option<&StatusSection> {
        self.sections.iter().find(|section| section.bucket == bucket)
    }
}
