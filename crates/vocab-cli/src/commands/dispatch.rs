use chrono::{DateTime, Utc};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `now` is read once per invocation and shared by every handler.
pub fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::handle(&args, ctx, flags, now),
        Commands::MarkReviewed(args) => commands::mark_reviewed::handle(&args, ctx, flags, now),
        Commands::Review(args) => commands::review::handle(&args, ctx, flags, now),
        Commands::Status(args) => commands::status::handle(&args, ctx, flags, now),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
