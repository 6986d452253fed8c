//! Workspace config file source: .sdkconf/config.toml and .sdkconf/{profile}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Environment variable selecting the profile file.
pub const PROFILE_ENV_VAR: &str = "SDKCONF_PROFILE";

/// Add workspace config files to builder.
/// Precedence: .sdkconf/config.toml (base) then .sdkconf/{SDKCONF_PROFILE}.toml.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_dir = workspace_root.join(".sdkconf");
    let profile = std::env::var(PROFILE_ENV_VAR).unwrap_or_else(|_| "default".to_string());

    let mut builder = builder;

    let base_config_path = config_dir.join("config.toml");
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path.as_path()).required(false));
    }

    let profile_config_path = config_dir.join(format!("{}.toml", profile));
    if profile_config_path.exists() {
        builder = builder.add_source(File::from(profile_config_path.as_path()).required(false));
    }

    Ok(builder)
}
