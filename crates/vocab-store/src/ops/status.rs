//! Status reporting: bucket every entry as stub, promoted, or due.

use chrono::{DateTime, Utc};
use vocab_core::enums::{Bucket, Category};
use vocab_core::lifecycle::{classify, missing_fields};
use vocab_core::responses::{BucketCounts, StatusItem, StatusResponse, StatusSection};

use crate::error::StoreError;
use crate::service::VocabService;

/// Display order of report sections.
const SECTION_ORDER: [Bucket; 3] = [Bucket::Stub, Bucket::Due, Bucket::Promoted];

/// Filters and interval for a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusQuery {
    pub category: Option<Category>,
    pub bucket: Option<Bucket>,
    pub interval_days: u32,
}

impl VocabService {
    /// Bucket every entry (after the category filter) and report the
    /// sections requested by the bucket filter. Counts always cover all
    /// three buckets.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` only if a category directory cannot be listed.
    pub fn status_report(
        &self,
        query: &StatusQuery,
        now: DateTime<Utc>,
    ) -> Result<StatusResponse, StoreError> {
        let scan = self.store().load_all(query.category)?;

        let mut counts = BucketCounts::default();
        let mut sections: Vec<StatusSection> = SECTION_ORDER
            .into_iter()
            .filter(|bucket| query.bucket.is_none_or(|wanted| wanted == *bucket))
            .map(|bucket| StatusSection {
                bucket,
                items: Vec::new(),
            })
            .collect();

        for stored in &scan.entries {
            let bucket = classify(&stored.entry, query.interval_days, now);
            match bucket {
                Bucket::Due => counts.due += 1,
                Bucket::Promoted => counts.promoted += 1,
                Bucket::Stub => counts.stub += 1,
            }

            let Some(section) = sections.iter_mut().find(|s| s.bucket == bucket) else {
                continue;
            };
            let missing = if bucket == Bucket::Stub {
                missing_fields(&stored.entry)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            } else {
                Vec::new()
            };
            section.items.push(StatusItem {
                name: stored.entry.name().to_string(),
                category: stored.entry.category(),
                path: self.display_path(&stored.path),
                last_reviewed: stored.entry.last_reviewed(),
                missing,
            });
        }

        Ok(StatusResponse {
            interval_days: query.interval_days,
            category: query.category,
            bucket: query.bucket,
            total: counts.total(),
            counts,
            sections,
            skipped: scan.skipped,
        })
    }
}
