//! End-to-end lifecycle scenarios against a real directory tree:
//! - Creation: stubs, missing context, naming conflicts
//! - Review: fill in, mark, due again after the interval
//! - Store: save/load per category, malformed records, hand edits

use std::fs;

use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use vocab_config::StoreConfig;
use vocab_core::create::NewEntry;
use vocab_core::entities::Entry;
use vocab_core::enums::{Bucket, Category};
use vocab_core::lifecycle::{is_due_for_review, is_promoted};
use vocab_store::{StatusQuery, StoreError, StoreLayout, VocabService};

fn service(tmp: &TempDir) -> VocabService {
    VocabService::from_layout(StoreLayout::new(tmp.path(), &StoreConfig::default()))
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 10, 20, 0, 0).unwrap()
}

fn all_buckets(interval_days: u32) -> StatusQuery {
    StatusQuery {
        category: None,
        bucket: None,
        interval_days,
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[test]
fn word_stub_without_example() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);

    let stored = svc
        .create_entry(NewEntry::new(Category::Word, "Break the ice"), t0())
        .unwrap();
    let raw = fs::read_to_string(tmp.path().join("words/break-the-ice.yaml")).unwrap();
    assert!(raw.contains("name: Break the ice"));
    assert!(raw.contains("type: word"));
    assert!(raw.contains("meaning: null"));
    assert!(raw.contains("examples: []"));
    assert!(raw.contains("last_reviewed: null"));
    assert!(!is_promoted(&stored.entry));

    let report = svc.status_report(&all_buckets(7), t0()).unwrap();
    let stubs = &report.section(Bucket::Stub).unwrap().items;
    assert_eq!(stubs.len(), 1);
    assert_eq!(stubs[0].name, "Break the ice");
    assert_eq!(stubs[0].missing, vec!["part_of_speech", "meaning", "examples"]);
}

#[test]
fn terminology_requires_context() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);

    let err = svc
        .create_entry(
            NewEntry::new(Category::Terminology, "backpressure")
                .with_example("The queue applies backpressure."),
            t0(),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "terminology entries require a context");
    assert!(svc.store().list_all().unwrap().is_empty());
}

#[test]
fn conflicting_create_leaves_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);
    let first = svc
        .create_entry(NewEntry::new(Category::Word, "ephemeral"), t0())
        .unwrap();
    fs::write(
        &first.path,
        fs::read_to_string(&first.path)
            .unwrap()
            .replace("meaning: null", "meaning: lasting a short time"),
    )
    .unwrap();
    let before = fs::read_to_string(&first.path).unwrap();

    let err = svc
        .create_entry(
            NewEntry::new(Category::Word, "Ephemeral").with_example("Fame is ephemeral."),
            t0() + Duration::days(1),
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::NamingConflict { .. }));
    assert_eq!(fs::read_to_string(&first.path).unwrap(), before);
}

// ---------------------------------------------------------------------------
// Review cycle
// ---------------------------------------------------------------------------

/// Replace the record with a fully filled-in version, as a user editing the
/// file would.
fn fill_idiom(svc: &VocabService, path: &std::path::Path) {
    let Entry::Idiom(mut idiom) = svc.store().load(path).unwrap() else {
        panic!("expected an idiom");
    };
    idiom.meaning = Some("to attempt something".into());
    idiom.examples = vec!["Go on, give it a shot.".into()];
    svc.store().save(path, &Entry::Idiom(idiom)).unwrap();
}

#[test]
fn filled_idiom_is_due_again_after_interval() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);
    let stored = svc
        .create_entry(NewEntry::new(Category::Idiom, "give it a shot"), t0())
        .unwrap();
    assert!(!is_due_for_review(&stored.entry, 7, t0()));

    fill_idiom(&svc, &stored.path);
    let filled = svc.store().load(&stored.path).unwrap();
    assert!(is_promoted(&filled));
    assert!(is_due_for_review(&filled, 7, t0()));

    let reviewed_at = t0() + Duration::hours(2);
    let response = svc.mark_reviewed_named(&["give it a shot".into()], reviewed_at);
    assert_eq!(response.marked.len(), 1);

    let reviewed = svc.store().load(&stored.path).unwrap();
    assert_eq!(reviewed.last_reviewed(), Some(reviewed_at));
    assert!(!is_due_for_review(&reviewed, 7, reviewed_at));
    assert!(!is_due_for_review(&reviewed, 7, reviewed_at + Duration::days(6)));
    assert!(is_due_for_review(&reviewed, 7, reviewed_at + Duration::days(8)));

    let later = svc
        .due_for_review(7, Some(20), reviewed_at + Duration::days(8))
        .unwrap();
    assert_eq!(later.total_due, 1);
    assert_eq!(later.entries[0].entry.name(), "give it a shot");
}

#[test]
fn targeted_not_found_is_reported_not_fatal() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);

    let response = svc.mark_reviewed_named(&["nonexistent entry".into()], t0());
    assert!(response.marked.is_empty());
    assert_eq!(response.not_found, vec!["nonexistent entry"]);
}

#[test]
fn batch_review_skips_malformed_and_marks_due() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);
    let stored = svc
        .create_entry(NewEntry::new(Category::Idiom, "under the weather"), t0())
        .unwrap();
    fill_idiom(&svc, &stored.path);
    fs::write(tmp.path().join("idioms/garbled.yaml"), ":\n  - [").unwrap();

    let response = svc.mark_due_reviewed(7, t0() + Duration::days(1)).unwrap();
    assert_eq!(response.marked.len(), 1);
    assert_eq!(response.skipped.len(), 1);
    assert!(response.skipped[0].path.ends_with("garbled.yaml"));
}

// ---------------------------------------------------------------------------
// Store behavior
// ---------------------------------------------------------------------------

#[rstest]
#[case::word(NewEntry::new(Category::Word, "Laconic")
    .with_part_of_speech("adjective")
    .with_meaning("using few words")
    .with_example("His laconic reply ended the meeting."))]
#[case::idiom(NewEntry::new(Category::Idiom, "once in a blue moon")
    .with_meaning("rarely"))]
#[case::terminology(NewEntry::new(Category::Terminology, "TCP/IP")
    .with_context("networking")
    .with_example("TCP/IP underpins the internet."))]
fn save_and_load_roundtrip(#[case] new: NewEntry) {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);
    let mut stored = svc.create_entry(new, t0()).unwrap();

    stored.entry.mark_reviewed(t0() + Duration::days(3));
    svc.store().save(&stored.path, &stored.entry).unwrap();
    assert_eq!(svc.store().load(&stored.path).unwrap(), stored.entry);
}

#[test]
fn slug_lookup_matches_creation() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);
    let stored = svc
        .create_entry(
            NewEntry::new(Category::Terminology, "Client/Server Model")
                .with_context("architecture"),
            t0(),
        )
        .unwrap();

    assert!(stored.path.ends_with("terminologies/client-server-model.yaml"));
    assert_eq!(
        svc.store().resolve_by_name("client/server model"),
        Some(stored.path.clone())
    );
    assert_eq!(
        svc.store().resolve_by_name("CLIENT SERVER MODEL"),
        Some(stored.path)
    );

    let padded = svc
        .create_entry(NewEntry::new(Category::Word, " Break the ice "), t0())
        .unwrap();
    assert!(padded.path.ends_with("words/break-the-ice.yaml"));
    assert_eq!(padded.entry.name(), "Break the ice");
    assert_eq!(
        svc.store().resolve_by_name(" Break the ice "),
        Some(padded.path.clone())
    );
    let response = svc.mark_reviewed_named(&[" Break the ice ".to_string()], t0());
    assert!(response.not_found.is_empty());
    assert_eq!(response.marked.len(), 1);
}

#[test]
fn hand_added_fields_make_record_malformed() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);
    let stored = svc
        .create_entry(NewEntry::new(Category::Word, "gregarious"), t0())
        .unwrap();
    let mut raw = fs::read_to_string(&stored.path).unwrap();
    raw.push_str("mnemonic: greg is a social guy\n");
    fs::write(&stored.path, &raw).unwrap();

    let response = svc.mark_reviewed_named(&["gregarious".into()], t0());
    assert!(response.marked.is_empty());
    assert_eq!(response.skipped.len(), 1);
    assert_eq!(fs::read_to_string(&stored.path).unwrap(), raw);
}

#[test]
fn custom_layout_is_respected() {
    let tmp = TempDir::new().unwrap();
    let config = StoreConfig {
        terminologies_dir: "glossary".into(),
        extension: "yml".into(),
        ..StoreConfig::default()
    };
    let svc = VocabService::from_layout(StoreLayout::new(tmp.path(), &config));
    svc.create_entry(
        NewEntry::new(Category::Terminology, "idempotent").with_context("http"),
        t0(),
    )
    .unwrap();

    assert!(tmp.path().join("glossary/idempotent.yml").is_file());
    let report = svc.status_report(&all_buckets(7), t0()).unwrap();
    assert_eq!(report.total, 1);
}
