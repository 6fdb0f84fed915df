use chrono::{DateTime, Utc};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReviewArgs;
use crate::commands::shared::limit::{effective_interval, effective_limit};
use crate::context::AppContext;
use crate::output::output;

/// Handle `vocab review`. Read-only.
pub fn handle(
    args: &ReviewArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let review = &ctx.config.review;
    let interval = effective_interval(args.days, review.interval_days);
    let limit = effective_limit(args.limit, args.all, review.display_limit);

    let response = ctx.service.due_for_review(interval, limit, now)?;
    output(&response, flags.format)
}
