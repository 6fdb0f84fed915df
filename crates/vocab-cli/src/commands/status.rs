use chrono::{DateTime, Utc};
use vocab_store::StatusQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::commands::shared::limit::effective_interval;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vocab status`.
pub fn handle(
    args: &StatusArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let query = query(args, ctx.config.review.interval_days);
    let response = ctx.service.status_report(&query, now)?;
    output(&response, flags.format)
}

fn query(args: &StatusArgs, configured_interval: u32) -> StatusQuery {
    StatusQuery {
        category: args.entry_type,
        bucket: args.status,
        interval_days: effective_interval(args.days, configured_interval),
    }
}
