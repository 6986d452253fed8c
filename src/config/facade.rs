//! Loading override records from files and the environment.

use super::sources::{environment, global_file, workspace_file};
use super::{default_config, ServiceConfig, ServiceSettings};
use crate::error::ConfigError;
use config::{Config, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads scalar override records.
///
/// Layers, lowest precedence first: global file, workspace files, `SDKCONF_*`
/// environment variables. Settings no layer mentions stay absent.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the override record for `workspace_root`.
    pub fn load(workspace_root: &Path) -> Result<ServiceConfig, ConfigError> {
        let builder = global_file::add_to_builder(Config::builder())?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let settings: ServiceSettings = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            "Loaded configuration overrides"
        );
        Ok(settings.into_overrides())
    }

    /// Load the override record from a single file.
    pub fn load_from_file(path: &Path) -> Result<ServiceConfig, ConfigError> {
        let settings: ServiceSettings = Config::builder()
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        Ok(settings.into_overrides())
    }

    /// The default configuration with the overrides for `workspace_root` applied.
    pub fn effective(workspace_root: &Path) -> Result<ServiceConfig, ConfigError> {
        let overrides = Self::load(workspace_root)?;
        Ok(default_config().merge(Some(&overrides)))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
