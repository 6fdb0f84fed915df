//! # vocab-core
//!
//! Core types, lifecycle predicates, and error types for the vocab tracker.
//!
//! This crate provides the foundational types shared across all vocab crates:
//! - Entry structs, one strict field set per category, tagged as `Entry`
//! - Category, status, and report bucket enums
//! - Slug normalization used for storage keys
//! - Stub construction for new entries
//! - Pure lifecycle predicates (promotion, due-for-review, classification)
//! - CLI response types
//!
//! Nothing in this crate touches the filesystem or reads the clock; callers
//! pass the current time in.

pub mod create;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod lifecycle;
pub mod responses;
pub mod slug;
pub mod timestamp;
