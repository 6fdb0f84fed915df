//! Lifecycle predicates: promotion, review due-ness, and report classification.
//!
//! ```text
//! created (stub) → promoted → due → reviewed → due → ...
//! ```
//!
//! Nothing here is stored. Every function is recomputed from the entry's
//! fields, and the current time is always passed in by the caller.

use chrono::{DateTime, Utc};

use crate::entities::Entry;
use crate::enums::{Bucket, EntryStatus};

/// Required fields of the entry's category that are absent or blank, in
/// canonical order.
///
/// Whitespace-only strings count as blank. A list field counts as present
/// only when it holds at least one non-blank item.
#[must_use]
pub fn missing_fields(entry: &Entry) -> Vec<&'static str> {
    let checks: Vec<(&'static str, bool)> = match entry {
        Entry::Word(word) => vec![
            ("part_of_speech", filled(word.part_of_speech.as_deref())),
            ("meaning", filled(word.meaning.as_deref())),
            ("examples", filled_list(&word.examples)),
        ],
        Entry::Idiom(idiom) => vec![
            ("meaning", filled(idiom.meaning.as_deref())),
            ("examples", filled_list(&idiom.examples)),
        ],
        Entry::Terminology(term) => vec![
            ("context", filled(term.context.as_deref())),
            ("meaning", filled(term.meaning.as_deref())),
            ("example", filled(term.example.as_deref())),
        ],
    };

    checks
        .into_iter()
        .filter_map(|(field, ok)| (!ok).then_some(field))
        .collect()
}

/// Whether every required field for the entry's category is filled in.
#[must_use]
pub fn is_promoted(entry: &Entry) -> bool {
    missing_fields(entry).is_empty()
}

/// Whether a promoted entry should be reviewed again.
///
/// Stubs are never due. A promoted entry that was never reviewed is due at
/// once; otherwise it is due when the whole days elapsed since `last_reviewed`
/// reach `interval_days`. Partial days are truncated.
#[must_use]
pub fn is_due_for_review(entry: &Entry, interval_days: u32, now: DateTime<Utc>) -> bool {
    if !is_promoted(entry) {
        return false;
    }
    entry
        .last_reviewed()
        .is_none_or(|reviewed| whole_days_between(reviewed, now) >= i64::from(interval_days))
}

/// Completion status, ignoring due-ness.
#[must_use]
pub fn status(entry: &Entry) -> EntryStatus {
    if !is_promoted(entry) {
        EntryStatus::Stub
    } else if entry.last_reviewed().is_none() {
        EntryStatus::PromotedUnreviewed
    } else {
        EntryStatus::PromotedReviewed
    }
}

/// Report bucket with precedence due → promoted → stub.
#[must_use]
pub fn classify(entry: &Entry, interval_days: u32, now: DateTime<Utc>) -> Bucket {
    if is_due_for_review(entry, interval_days, now) {
        Bucket::Due
    } else if is_promoted(entry) {
        Bucket::Promoted
    } else {
        Bucket::Stub
    }
}

/// Whole days from `from` to `to`, truncated toward zero.
#[must_use]
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_days()
}

fn filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn filled_list(values: &[String]) -> bool {
    values.iter().any(|v| !v.trim().is_empty())
}
