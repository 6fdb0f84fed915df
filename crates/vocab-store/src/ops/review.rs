//! Review workflow: targeted and batch marking, plus the read-only due list.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use vocab_core::lifecycle::is_due_for_review;
use vocab_core::responses::{
    MarkMode, MarkReviewedResponse, MarkedEntry, ReviewItem, ReviewResponse, SkippedRecord,
};

use crate::error::StoreError;
use crate::service::VocabService;
use crate::store::{StoredEntry, skip_reason};

impl VocabService {
    /// Mark each named entry reviewed at `now`, regardless of due status.
    ///
    /// Names are resolved independently; unknown names land in
    /// `not_found` and records that fail to load or save land in `skipped`.
    /// Neither stops the remaining names.
    #[must_use]
    pub fn mark_reviewed_named(
        &self,
        names: &[String],
        now: DateTime<Utc>,
    ) -> MarkReviewedResponse {
        let mut response = MarkReviewedResponse {
            mode: MarkMode::Targeted,
            interval_days: None,
            marked: Vec::new(),
            not_found: Vec::new(),
            skipped: Vec::new(),
        };

        for name in names {
            let path = match self.store().require_by_name(name) {
                Ok(path) => path,
                Err(e) => {
                    debug!("{e}");
                    response.not_found.push(name.clone());
                    continue;
                }
            };
            let outcome = self
                .store()
                .load(&path)
                .and_then(|entry| self.stamp(StoredEntry { path: path.clone(), entry }, now));
            match outcome {
                Ok(marked) => response.marked.push(marked),
                Err(e) => response.skipped.push(self.skip(&path, e)),
            }
        }

        response
    }

    /// Mark every entry due under `interval_days` as reviewed at `now`.
    ///
    /// Each record is written as soon as it qualifies; there is no
    /// all-or-nothing step.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` only if a category directory cannot be listed.
    pub fn mark_due_reviewed(
        &self,
        interval_days: u32,
        now: DateTime<Utc>,
    ) -> Result<MarkReviewedResponse, StoreError> {
        let scan = self.store().load_all(None)?;
        let mut response = MarkReviewedResponse {
            mode: MarkMode::Batch,
            interval_days: Some(interval_days),
            marked: Vec::new(),
            not_found: Vec::new(),
            skipped: scan.skipped,
        };

        for stored in scan.entries {
            if !is_due_for_review(&stored.entry, interval_days, now) {
                continue;
            }
            let path = stored.path.clone();
            match self.stamp(stored, now) {
                Ok(marked) => response.marked.push(marked),
                Err(e) => response.skipped.push(self.skip(&path, e)),
            }
        }

        info!(marked = response.marked.len(), interval_days, "batch review");
        Ok(response)
    }

    /// Entries due under `interval_days`, in store order, cut to `limit` if
    /// given. Never writes.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` only if a category directory cannot be listed.
    pub fn due_for_review(
        &self,
        interval_days: u32,
        limit: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<ReviewResponse, StoreError> {
        let scan = self.store().load_all(None)?;
        let total_entries = u32::try_from(scan.entries.len()).unwrap_or(u32::MAX);
        let due: Vec<StoredEntry> = scan
            .entries
            .into_iter()
            .filter(|stored| is_due_for_review(&stored.entry, interval_days, now))
            .collect();

        let total_due = u32::try_from(due.len()).unwrap_or(u32::MAX);
        let shown = limit.map_or(due.len(), |l| due.len().min(l as usize));

        let entries = due
            .into_iter()
            .take(shown)
            .zip(1u32..)
            .map(|(stored, index)| ReviewItem {
                index,
                path: self.display_path(&stored.path),
                entry: stored.entry,
            })
            .collect();

        Ok(ReviewResponse {
            interval_days,
            total_entries,
            total_due,
            limit,
            truncated: shown < total_due as usize,
            entries,
            skipped: scan.skipped,
        })
    }

    fn stamp(
        &self,
        mut stored: StoredEntry,
        now: DateTime<Utc>,
    ) -> Result<MarkedEntry, StoreError> {
        stored.entry.mark_reviewed(now);
        self.store().save(&stored.path, &stored.entry)?;
        info!(name = stored.entry.name(), "marked reviewed");
        Ok(MarkedEntry {
            name: stored.entry.name().to_string(),
            category: stored.entry.category(),
            path: self.display_path(&stored.path),
            last_reviewed: now,
        })
    }

    fn skip(&self, path: &Path, error: StoreError) -> SkippedRecord {
        debug!("skipping {error}");
        SkippedRecord {
            path: self.display_path(path),
            reason: skip_reason(error),
        }
    }
}
