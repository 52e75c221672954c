//! Config loading facade: defaults, global file, workspace files, then
//! CANOPY_* environment overrides.

use super::merge::merge_policy;
use super::sources;
use super::CanopyConfig;
use crate::error::ScanError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// files, environment.
    pub fn load(workspace_root: &Path) -> Result<CanopyConfig, ScanError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(Environment::with_prefix("CANOPY").separator("__"));
        Self::finish(builder)
    }

    /// Load configuration from an explicit file, bypassing discovery.
    /// Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<CanopyConfig, ScanError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()))
            .add_source(Environment::with_prefix("CANOPY").separator("__"));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<CanopyConfig, ScanError> {
        let config = builder.build()?;
        let loaded: CanopyConfig = config.try_deserialize()?;

        loaded.validate().map_err(|errors| {
            let joined = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            ScanError::Config(joined)
        })?;

        Ok(loaded)
    }
}
