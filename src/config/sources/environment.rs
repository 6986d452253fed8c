//! Environment source: SDKCONF_* variables (e.g. SDKCONF_REGION, SDKCONF_MAX_RETRIES).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "SDKCONF";

/// Add the environment source to builder.
///
/// Values stay strings here; booleans and integers are converted when the
/// settings are deserialized, so `SDKCONF_REGION=1.0` keeps its exact text.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(Environment::with_prefix(ENV_PREFIX))
}
