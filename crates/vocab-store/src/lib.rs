//! # vocab-store
//!
//! File-backed storage for vocab entries and the workflows built on it.
//!
//! Each entry is one YAML record named by its slug, under one directory per
//! category (`words/`, `idioms/`, `terminologies/` by default). `EntryStore`
//! does the reads and writes; `VocabService` layers entry creation, review
//! marking, the due list, and status reporting on top.
//!
//! A malformed record never aborts a scan. It is logged with `tracing` and
//! returned alongside the good entries.

pub mod codec;
pub mod error;
pub mod layout;
pub mod ops;
pub mod service;
pub mod store;

mod test_support;

pub use error::StoreError;
pub use layout::StoreLayout;
pub use ops::StatusQuery;
pub use service::VocabService;
pub use store::{EntryStore, Scan, StoredEntry};
