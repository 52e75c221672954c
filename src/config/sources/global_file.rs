//! Global config file source: the user-level canopy/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global config file, e.g. ~/.config/canopy/config.toml on
/// Linux. Respects XDG_CONFIG_HOME.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "canopy").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global config file source to the builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            let canonical_path = global_path
                .canonicalize()
                .unwrap_or_else(|_| global_path.clone());
            builder = builder
                .add_source(File::with_name(canonical_path.to_str().unwrap()).required(false));
        } else {
            debug!(
                config_path = %global_path.display(),
                "No global configuration file; using workspace and defaults"
            );
        }
    }
    Ok(builder)
}
