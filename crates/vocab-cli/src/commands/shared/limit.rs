/// Review interval with precedence: command flag -> configured value.
#[must_use]
pub fn effective_interval(local: Option<u32>, configured: u32) -> u32 {
    local.unwrap_or(configured)
}

/// Display limit for `vocab review`: `None` when `--all` lifts it, else the
/// flag value or the configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, all: bool, configured: u32) -> Option<u32> {
    if all {
        None
    } else {
        Some(local.unwrap_or(configured))
    }
}
