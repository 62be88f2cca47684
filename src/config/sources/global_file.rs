//! Global settings file: `<platform config dir>/ukconf/config.toml`
//! ($XDG_CONFIG_HOME/ukconf/config.toml on Linux).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to global settings file.
fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("sh", "unikraft", "ukconf").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add global settings file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global_config_path() {
        if path.is_file() {
            builder = builder.add_source(File::from(path).required(false));
        } else {
            debug!(config_path = %path.display(), "No global settings file");
        }
    }
    Ok(builder)
}
