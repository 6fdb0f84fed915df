use chrono::{DateTime, Utc};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MarkReviewedArgs;
use crate::commands::shared::limit::effective_interval;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vocab mark-reviewed`.
///
/// Named entries are marked regardless of due status; with no names every
/// due entry is marked. Unknown names are reported, not fatal.
pub fn handle(
    args: &MarkReviewedArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let response = if args.names.is_empty() {
        let interval = effective_interval(args.days, ctx.config.review.interval_days);
        ctx.service.mark_due_reviewed(interval, now)?
    } else {
        ctx.service.mark_reviewed_named(&args.names, now)
    };
    output(&response, flags.format)
}
