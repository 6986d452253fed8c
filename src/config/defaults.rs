//! Process-wide default configuration.

use super::ServiceConfig;
use crate::credentials::default_chain_credentials;
use crate::error::ConfigError;
use crate::http::HttpClient;
use crate::logging::LogSink;
use std::sync::OnceLock;
use tracing::debug;

/// Retry count meaning "use the service's own default".
pub const DEFAULT_RETRIES: i64 = -1;

/// Environment variable seeding the default region.
pub const REGION_ENV_VAR: &str = "AWS_REGION";

static DEFAULT_CONFIG: OnceLock<ServiceConfig> = OnceLock::new();

/// The configuration all service clients start from.
///
/// Built from the environment on first use and never modified afterwards.
pub fn default_config() -> &'static ServiceConfig {
    DEFAULT_CONFIG.get_or_init(|| {
        let config = ServiceConfig::defaults_from_env();
        debug!(
            region = config.region.as_deref().unwrap_or_default(),
            "Default service configuration initialized"
        );
        config
    })
}

/// Install a custom process-wide default.
///
/// Only possible before the default has been read or installed.
pub fn set_default_config(config: ServiceConfig) -> Result<(), ConfigError> {
    DEFAULT_CONFIG
        .set(config)
        .map_err(|_| ConfigError::DefaultAlreadyInitialized)
}

impl ServiceConfig {
    /// Fully populated defaults for `region`.
    pub fn defaults_for_region(region: impl Into<String>) -> Self {
        ServiceConfig {
            credentials: Some(default_chain_credentials().clone()),
            endpoint: Some(String::new()),
            region: Some(region.into()),
            disable_ssl: Some(false),
            http_client: Some(HttpClient::shared_default().clone()),
            log_http_body: Some(false),
            log_level: Some(0),
            logger: Some(LogSink::stdout().clone()),
            max_retries: Some(DEFAULT_RETRIES),
            disable_param_validation: Some(false),
            disable_compute_checksums: Some(false),
            force_path_style: Some(false),
        }
    }

    /// Defaults with the region read from `AWS_REGION`; unset yields `""`.
    pub fn defaults_from_env() -> Self {
        let region = std::env::var(REGION_ENV_VAR).unwrap_or_default();
        Self::defaults_for_region(region)
    }
}
