use anyhow::bail;
use schemars::{Schema, schema_for};
use vocab_core::entities::Entry;
use vocab_core::responses::{CreateResponse, MarkReviewedResponse, ReviewResponse, StatusResponse};

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};

/// Names accepted by `vocab schema`.
const SCHEMA_NAMES: [&str; 5] = ["entry", "create", "mark-reviewed", "review", "status"];

/// Handle `vocab schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_by_name(&args.type_name)?;
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Text | OutputFormat::Json => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}

fn schema_by_name(name: &str) -> anyhow::Result<Schema> {
    let schema = match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "entry" => schema_for!(Entry),
        "create" => schema_for!(CreateResponse),
        "mark-reviewed" => schema_for!(MarkReviewedResponse),
        "review" => schema_for!(ReviewResponse),
        "status" => schema_for!(StatusResponse),
        _ => bail!(
            "unknown schema '{name}' (expected one of: {})",
            SCHEMA_NAMES.join(", ")
        ),
    };
    Ok(schema)
}
