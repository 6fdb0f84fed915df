//! Review scheduling defaults.

use serde::{Deserialize, Serialize};

/// Default review interval in days.
const fn default_interval_days() -> u32 {
    7
}

/// Default number of entries shown by `vocab review`.
const fn default_display_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Days after the last review before a promoted entry is due again.
    #[serde(default = "default_interval_days")]
    pub interval_days: u32,

    /// Maximum entries shown by `vocab review` unless `--all` is passed.
    #[serde(default = "default_display_limit")]
    pub display_limit: u32,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            interval_days: default_interval_days(),
            display_limit: default_display_limit(),
        }
    }
}
