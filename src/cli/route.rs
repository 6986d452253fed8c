//! CLI route: run context and command dispatch.

use crate::cli::parse::Commands;
use crate::cli::presentation::format_config;
use crate::config::{default_config, ConfigLoader, ServiceConfig};
use crate::error::ConfigError;
use std::path::PathBuf;
use tracing::debug;

/// Runtime context for CLI execution: workspace root and optional config file.
pub struct RunContext {
    workspace_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RunContext {
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            workspace_root,
            config_path,
        }
    }

    /// Override record from the explicit config file, or from the layered sources.
    pub fn loaded_overrides(&self) -> Result<ServiceConfig, ConfigError> {
        match &self.config_path {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(&self.workspace_root),
        }
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ConfigError> {
        match command {
            Commands::Show { overrides, format } => {
                let loaded = self.loaded_overrides()?;
                let flags = overrides.to_overrides();
                let effective = default_config().merge_all([&loaded, &flags]);
                debug!(
                    region = effective.region.as_deref().unwrap_or_default(),
                    "Resolved effective configuration"
                );
                format_config(&effective, *format)
            }
            Commands::Overrides { format } => format_config(&self.loaded_overrides()?, *format),
            Commands::ConfigPath => Ok(ConfigLoader::global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(no HOME or XDG_CONFIG_HOME set)".to_string())),
        }
    }
}
