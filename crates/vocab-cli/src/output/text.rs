//! Text views for command responses.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use vocab_core::entities::Entry;
use vocab_core::enums::{Bucket, Category};
use vocab_core::lifecycle::missing_fields;
use vocab_core::responses::{
    CreateResponse, MarkMode, MarkReviewedResponse, ReviewItem, ReviewResponse, SkippedRecord,
    StatusResponse, StatusSection,
};

use super::TextView;
use super::table::{TableOptions, paint, render_table};

const RULE_WIDTH: usize = 60;
const NOT_SET: &str = "N/A";

impl TextView for CreateResponse {
    fn render_text(&self, _color: bool) -> String {
        let mut out = format!(
            "Created {} entry: {}\n  File: {}",
            self.entry.category(),
            self.entry.name(),
            self.path
        );
        let missing = missing_fields(&self.entry);
        if !missing.is_empty() {
            let _ = write!(out, "\n  Missing: {}", missing.join(", "));
            out.push_str("\n\nEdit the file to fill in the missing fields.");
        }
        out
    }
}

impl TextView for MarkReviewedResponse {
    fn render_text(&self, _color: bool) -> String {
        let mut out = String::new();
        push_skipped(&mut out, &self.skipped);

        match self.mode {
            MarkMode::Targeted => {
                for marked in &self.marked {
                    let _ = writeln!(out, "Marked as reviewed: {} ({})", marked.name, marked.path);
                }
                for name in &self.not_found {
                    let _ = writeln!(out, "Warning: entry not found: {name}");
                }
                if !self.marked.is_empty() {
                    let _ = write!(
                        out,
                        "\nMarked {} as reviewed.",
                        plural(self.marked.len(), "entry", "entries")
                    );
                }
                if !self.not_found.is_empty() {
                    let _ = write!(
                        out,
                        "\nCould not find {}.",
                        plural(self.not_found.len(), "entry", "entries")
                    );
                }
            }
            MarkMode::Batch => {
                let interval = self.interval_days.unwrap_or_default();
                if self.marked.is_empty() {
                    let _ = write!(
                        out,
                        "No entries are due for review (checked with {interval}-day interval)."
                    );
                } else {
                    let _ = writeln!(
                        out,
                        "Marked {} due for review ({interval}-day interval):",
                        plural(self.marked.len(), "entry", "entries")
                    );
                    for marked in &self.marked {
                        let _ = writeln!(out, "  ✓ {} ({})", marked.name, marked.category);
                    }
                    let _ = write!(
                        out,
                        "\nRecord the review in version control:\n  git add .\n  git commit -m \"Review: marked {} entries as reviewed\"",
                        self.marked.len()
                    );
                }
            }
        }
        out.trim_end().to_string()
    }
}

impl TextView for ReviewResponse {
    fn render_text(&self, color: bool) -> String {
        let mut out = String::new();
        push_skipped(&mut out, &self.skipped);

        if self.total_entries == 0 && self.skipped.is_empty() {
            push_empty_store(&mut out, None);
            return out;
        }
        if self.entries.is_empty() {
            let _ = write!(
                out,
                "No entries are due for review (checked with {}-day interval).\n\nTo see all entries and their status, run: vocab status",
                self.interval_days
            );
            return out;
        }

        let shown = self.entries.len();
        let _ = write!(
            out,
            "Found {} due for review",
            plural(self.total_due as usize, "entry", "entries")
        );
        if self.truncated {
            let _ = write!(out, ", showing the first {shown} (use --all to see every one)");
        }
        out.push_str(":\n");

        for item in &self.entries {
            push_card(&mut out, item, shown, color);
        }

        let rule = "=".repeat(RULE_WIDTH);
        let _ = write!(
            out,
            "\n{rule}\n\nAfter reviewing, mark these entries as reviewed with:\n  vocab mark-reviewed\n\nOr mark specific entries:\n  vocab mark-reviewed <entry-name-1> <entry-name-2> ..."
        );
        out
    }
}

fn push_card(out: &mut String, item: &ReviewItem, shown: usize, color: bool) {
    let rule = "=".repeat(RULE_WIDTH);
    let title = format!("Entry {}/{shown}: {}", item.index, item.entry.name());
    let title = if color { paint("1", &title) } else { title };
    let _ = writeln!(
        out,
        "\n{rule}\n{title}\nFile: {}\nType: {}\n{rule}\n",
        item.path,
        item.entry.category()
    );

    match &item.entry {
        Entry::Word(word) => {
            let _ = writeln!(out, "Part of Speech: {}", or_na(word.part_of_speech.as_deref()));
            let _ = writeln!(out, "\nMeaning: {}", or_na(word.meaning.as_deref()));
            push_examples(out, &word.examples);
        }
        Entry::Idiom(idiom) => {
            let _ = writeln!(out, "Meaning: {}", or_na(idiom.meaning.as_deref()));
            push_examples(out, &idiom.examples);
        }
        Entry::Terminology(term) => {
            let _ = writeln!(out, "Context: {}", or_na(term.context.as_deref()));
            let _ = writeln!(out, "\nMeaning: {}", or_na(term.meaning.as_deref()));
            let _ = writeln!(out, "\nExample: {}", or_na(term.example.as_deref()));
        }
    }
}

fn push_examples(out: &mut String, examples: &[String]) {
    out.push_str("\nExamples:\n");
    for (number, example) in examples.iter().enumerate() {
        let _ = writeln!(out, "  {}. {example}", number + 1);
    }
}

impl TextView for StatusResponse {
    fn render_text(&self, color: bool) -> String {
        let mut out = String::new();
        push_skipped(&mut out, &self.skipped);

        if self.total == 0 && self.skipped.is_empty() {
            push_empty_store(&mut out, self.category);
            return out;
        }

        let heavy = "=".repeat(RULE_WIDTH);
        out.push_str("Vocabulary Status Report");
        if let Some(category) = self.category {
            let _ = write!(out, " ({category} entries)");
        }
        let _ = writeln!(out, "\n{heavy}\n");
        let _ = writeln!(
            out,
            "Total entries: {}  ({} due, {} promoted, {} stub)",
            self.total, self.counts.due, self.counts.promoted, self.counts.stub
        );
        let _ = writeln!(out, "Review interval: {} days", self.interval_days);

        for section in &self.sections {
            out.push('\n');
            push_section(&mut out, section, color);
        }

        let _ = write!(out, "\n{heavy}\n\nNext steps:");
        let mut any = false;
        if self.counts.stub > 0 {
            any = true;
            let _ = write!(
                out,
                "\n  • Edit {} to add missing fields",
                plural(self.counts.stub as usize, "stub", "stubs")
            );
        }
        if self.counts.due > 0 {
            any = true;
            let _ = write!(
                out,
                "\n  • Review {}: vocab review\n  • After reviewing, mark as reviewed: vocab mark-reviewed",
                plural(self.counts.due as usize, "entry", "entries")
            );
        }
        if !any {
            out.push_str("\n  • All entries are up to date!");
        }
        out
    }
}

fn push_empty_store(out: &mut String, category: Option<Category>) {
    match category {
        Some(category) => {
            let _ = write!(
                out,
                "No {category} entries found.\nCreate one using: vocab add {category} <name>"
            );
        }
        None => out.push_str(
            "No vocabulary entries found.\nCreate entries using: vocab add <word|idiom|terminology> <name>",
        ),
    }
}

fn push_section(out: &mut String, section: &StatusSection, color: bool) {
    let (title, blurb) = match section.bucket {
        Bucket::Stub => ("STUBS", "Incomplete entries, not yet reviewable"),
        Bucket::Due => ("DUE FOR REVIEW", "Ready to review today"),
        Bucket::Promoted => ("PROMOTED", "Complete but not due for review"),
    };
    let heading = format!("{title} ({})", section.items.len());
    let heading = if color {
        paint(bucket_color(section.bucket), &heading)
    } else {
        heading
    };
    let _ = writeln!(out, "{heading} - {blurb}:");

    if section.items.is_empty() {
        out.push_str("  None\n");
        return;
    }

    let options = TableOptions { color };
    let table = if section.bucket == Bucket::Stub {
        let rows: Vec<Vec<String>> = section
            .items
            .iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    item.category.to_string(),
                    item.missing.join(", "),
                    item.path.clone(),
                ]
            })
            .collect();
        render_table(&["name", "type", "missing", "file"], &rows, options)
    } else {
        let rows: Vec<Vec<String>> = section
            .items
            .iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    item.category.to_string(),
                    format_date(item.last_reviewed),
                ]
            })
            .collect();
        render_table(&["name", "type", "last reviewed"], &rows, options)
    };
    out.push_str(&table);
    out.push('\n');
}

const fn bucket_color(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Stub => "33",
        Bucket::Due => "31",
        Bucket::Promoted => "32",
    }
}

fn push_skipped(out: &mut String, skipped: &[SkippedRecord]) {
    for record in skipped {
        let _ = writeln!(out, "Warning: could not load {}: {}", record.path, record.reason);
    }
    if !skipped.is_empty() {
        out.push('\n');
    }
}

fn format_date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| "never".to_string(), |at| at.format("%Y-%m-%d").to_string())
}

fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(NOT_SET)
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
