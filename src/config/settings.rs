//! Serializable view of the scalar configuration fields.
//!
//! Files and environment variables can only express scalar settings, so this is
//! what sources deserialize into. Handle fields never appear here.

use super::ServiceConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_ssl: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_http_body: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_param_validation: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_compute_checksums: Option<bool>,

    #[serde(
        default,
        alias = "s3_force_path_style",
        skip_serializing_if = "Option::is_none"
    )]
    pub force_path_style: Option<bool>,
}

impl ServiceSettings {
    /// Override record carrying these settings; handle fields stay absent.
    pub fn into_overrides(self) -> ServiceConfig {
        ServiceConfig {
            endpoint: self.endpoint,
            region: self.region,
            disable_ssl: self.disable_ssl,
            log_http_body: self.log_http_body,
            log_level: self.log_level,
            max_retries: self.max_retries,
            disable_param_validation: self.disable_param_validation,
            disable_compute_checksums: self.disable_compute_checksums,
            force_path_style: self.force_path_style,
            ..ServiceConfig::default()
        }
    }
}

impl From<&ServiceConfig> for ServiceSettings {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            region: config.region.clone(),
            disable_ssl: config.disable_ssl,
            log_http_body: config.log_http_body,
            log_level: config.log_level,
            max_retries: config.max_retries,
            disable_param_validation: config.disable_param_validation,
            disable_compute_checksums: config.disable_compute_checksums,
            force_path_style: config.force_path_style,
        }
    }
}
