use std::path::Path;

use anyhow::Context;
use vocab_config::VocabConfig;
use vocab_store::{StoreLayout, VocabService};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: VocabService,
    pub config: VocabConfig,
}

impl AppContext {
    /// Load configuration for `project_root` and open the entry store there.
    pub fn init(project_root: &Path) -> anyhow::Result<Self> {
        let config = VocabConfig::load(project_root).with_context(|| {
            format!(
                "failed to load configuration for {}",
                project_root.display()
            )
        })?;

        let layout = StoreLayout::new(project_root, &config.store);
        tracing::debug!(
            root = %project_root.display(),
            words = %layout.dir_for(vocab_core::enums::Category::Word).display(),
            "opened entry store"
        );

        Ok(Self {
            service: VocabService::from_layout(layout),
            config,
        })
    }
}
