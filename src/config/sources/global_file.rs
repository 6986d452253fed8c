//! Global config file source: $XDG_CONFIG_HOME/sdkconf/config.toml or ~/.config/sdkconf/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::PathBuf;
use tracing::warn;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("sdkconf").join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            builder = builder.add_source(File::from(global_path.as_path()).required(false));
        } else {
            warn!(
                config_path = %global_path.display(),
                "Global configuration file not found. Consider creating it for user-level defaults."
            );
        }
    }
    Ok(builder)
}
