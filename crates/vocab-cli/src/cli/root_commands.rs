use clap::{Args, Subcommand};
use vocab_core::enums::{Bucket, Category};

use crate::commands::shared::parse::enum_arg;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a stub entry for a word, idiom, or terminology.
    Add(AddArgs),
    /// Mark entries as reviewed (named entries, or every due entry).
    #[command(
        name = "mark-reviewed",
        after_help = "If no entry names are given, every entry due for review is marked."
    )]
    MarkReviewed(MarkReviewedArgs),
    /// Show entries due for review. Never modifies records.
    Review(ReviewArgs),
    /// Report stub, promoted, and due entries.
    Status(StatusArgs),
    /// Dump the JSON schema of the record format or a command response.
    Schema(SchemaArgs),
}

/// Arguments for `vocab add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Entry type: word, idiom, terminology
    #[arg(value_parser = enum_arg::<Category>)]
    pub entry_type: Category,
    /// The word, idiom, or term itself
    pub name: String,
    /// Example sentence
    #[arg(long)]
    pub example: Option<String>,
    /// Context the term belongs to (required for terminology)
    #[arg(long)]
    pub context: Option<String>,
    /// Meaning, if already known
    #[arg(long)]
    pub meaning: Option<String>,
    /// Part of speech (words only)
    #[arg(long)]
    pub part_of_speech: Option<String>,
}

/// Arguments for `vocab mark-reviewed`.
#[derive(Clone, Debug, Args)]
pub struct MarkReviewedArgs {
    /// Names of entries to mark as reviewed
    pub names: Vec<String>,
    /// Days before an entry is due for review (batch mode)
    #[arg(long)]
    pub days: Option<u32>,
}

/// Arguments for `vocab review`.
#[derive(Clone, Debug, Args)]
pub struct ReviewArgs {
    /// Days before an entry is due for review
    #[arg(long)]
    pub days: Option<u32>,
    /// Maximum number of entries to show
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), conflicts_with = "all")]
    pub limit: Option<u32>,
    /// Show all due entries, ignoring the limit
    #[arg(long)]
    pub all: bool,
}

/// Arguments for `vocab status`.
#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    /// Only entries of this type: word, idiom, terminology
    #[arg(long = "type", value_parser = enum_arg::<Category>)]
    pub entry_type: Option<Category>,
    /// Only this bucket: stub, promoted, due
    #[arg(long, value_parser = enum_arg::<Bucket>)]
    pub status: Option<Bucket>,
    /// Review interval in days
    #[arg(long)]
    pub days: Option<u32>,
}

/// Arguments for `vocab schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: entry, create, mark-reviewed, review, status
    pub type_name: String,
}
