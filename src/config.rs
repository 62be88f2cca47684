//! Configuration System
//!
//! Settings for the tool itself (logging, prompting), layered from built-in
//! defaults, the global settings file and `UKCONF_*` environment variables.
//! This is unrelated to the dotconfig being edited.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge_policy;
mod sources;

/// Root settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Interactive fallback settings
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Interactive fallback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Allow prompting for an alternate dotconfig when `.config` is missing
    #[serde(default = "default_true")]
    pub interactive: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            interactive: default_true(),
        }
    }
}

/// Loads [`AppConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global settings file if present, then environment.
    pub fn load() -> Result<AppConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::env::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Defaults, then `path` (which must exist), then environment.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(config::File::from(PathBuf::from(path)).required(true));
        let builder = sources::env::add_to_builder(builder);
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<AppConfig, ApiError> {
        let settings: AppConfig = builder.build()?.try_deserialize()?;
        debug!(
            interactive = settings.prompt.interactive,
            log_level = %settings.logging.level,
            "Loaded settings"
        );
        Ok(settings)
    }
}
