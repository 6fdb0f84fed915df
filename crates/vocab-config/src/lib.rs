//! # vocab-config
//!
//! Layered configuration loading for the vocab tracker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Project-level `vocab.toml` at the project root
//! 2. User-level `~/.config/vocab/config.toml`
//! 3. Built-in defaults
//!
//! Command-line flags override whatever this produces. There is no
//! environment-variable layer.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use vocab_config::VocabConfig;
//!
//! let config = VocabConfig::load(Path::new(".")).expect("config");
//! println!("review every {} days", config.review.interval_days);
//! ```

mod error;
mod review;
mod store;

pub use error::ConfigError;
pub use review::ReviewConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the project-level config, also used to locate the project root.
pub const PROJECT_CONFIG_FILE: &str = "vocab.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct VocabConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub review: ReviewConfig,
}

impl VocabConfig {
    /// Load and validate configuration for the project rooted at `project_root`.
    ///
    /// Precedence (highest to lowest):
    /// 1. `{project_root}/vocab.toml`
    /// 2. `~/.config/vocab/config.toml`
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` for unreadable or mistyped TOML and
    /// `ConfigError::InvalidValue` if the merged values fail validation.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config (highest priority)
        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        if self.review.display_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "review.display_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vocab").join("config.toml"))
    }
}
