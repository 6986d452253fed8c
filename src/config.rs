//! Service Configuration
//!
//! [`ServiceConfig`] is the record every service client is built from. Each field is
//! optional so an override record can name only the settings it changes: absent
//! means "not specified", while a present `false`, `0` or `""` is a real value.
//!
//! Records are never edited after they are shared. Customization goes through
//! [`ServiceConfig::merge`], which layers an override record onto a base and
//! returns a new record. The process-wide base is [`default_config`].

use crate::credentials::Credentials;
use crate::http::HttpClient;
use crate::logging::LogSink;

mod defaults;
mod facade;
mod merge;
mod settings;
mod sources;

pub use defaults::{default_config, set_default_config, DEFAULT_RETRIES, REGION_ENV_VAR};
pub use facade::ConfigLoader;
pub use settings::ServiceSettings;

/// Configuration for service clients.
///
/// Handle fields (`credentials`, `http_client`, `logger`) are shared: copies of a
/// record point at the same underlying resource. Equality compares scalar fields
/// by value and handle fields by identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceConfig {
    /// Credentials used to sign requests.
    pub credentials: Option<Credentials>,

    /// Endpoint URL (hostname or full URI) overriding the generated one.
    /// `""` selects the generated endpoint. A region is still required.
    pub endpoint: Option<String>,

    /// Region to send requests to.
    pub region: Option<String>,

    /// Send requests without TLS.
    pub disable_ssl: Option<bool>,

    /// HTTP client used to send requests.
    pub http_client: Option<HttpClient>,

    /// Also log request bodies. Only takes effect when `log_level` is non-zero.
    pub log_http_body: Option<bool>,

    /// Logging level; zero disables logging.
    pub log_level: Option<i64>,

    /// Destination for log output.
    pub logger: Option<LogSink>,

    /// Maximum retries for failed requests. [`DEFAULT_RETRIES`] defers to the
    /// service's own default.
    pub max_retries: Option<i64>,

    /// Skip semantic validation of request parameters.
    pub disable_param_validation: Option<bool>,

    /// Skip request and response checksum computation.
    pub disable_compute_checksums: Option<bool>,

    /// Use path-style addressing (`https://host/BUCKET/KEY`) for object storage
    /// instead of virtual-hosted buckets.
    pub force_path_style: Option<bool>,
}

impl ServiceConfig {
    /// An empty override record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow copy: scalar fields are copied, handle fields are shared.
    pub fn duplicate(&self) -> ServiceConfig {
        self.clone()
    }

    /// Layer `overrides` onto this record and return the result.
    ///
    /// Every field present in `overrides` replaces the value here, including
    /// `false`, `0` and `""`. Absent fields keep this record's value. `None` is a
    /// no-op and yields a duplicate. Neither input is modified.
    pub fn merge(&self, overrides: Option<&ServiceConfig>) -> ServiceConfig {
        let Some(overrides) = overrides else {
            return self.duplicate();
        };

        ServiceConfig {
            credentials: merge::overlay(&self.credentials, &overrides.credentials),
            endpoint: merge::overlay(&self.endpoint, &overrides.endpoint),
            region: merge::overlay(&self.region, &overrides.region),
            disable_ssl: merge::overlay(&self.disable_ssl, &overrides.disable_ssl),
            http_client: merge::overlay(&self.http_client, &overrides.http_client),
            log_http_body: merge::overlay(&self.log_http_body, &overrides.log_http_body),
            log_level: merge::overlay(&self.log_level, &overrides.log_level),
            logger: merge::overlay(&self.logger, &overrides.logger),
            max_retries: merge::overlay(&self.max_retries, &overrides.max_retries),
            disable_param_validation: merge::overlay(
                &self.disable_param_validation,
                &overrides.disable_param_validation,
            ),
            disable_compute_checksums: merge::overlay(
                &self.disable_compute_checksums,
                &overrides.disable_compute_checksums,
            ),
            force_path_style: merge::overlay(&self.force_path_style, &overrides.force_path_style),
        }
    }

    /// Layer several override records in order; later records win.
    pub fn merge_all<'a, I>(&self, overrides: I) -> ServiceConfig
    where
        I: IntoIterator<Item = &'a ServiceConfig>,
    {
        overrides
            .into_iter()
            .fold(self.duplicate(), |acc, next| acc.merge(Some(next)))
    }

    /// Whether logging is on (log level present and non-zero).
    pub fn logging_enabled(&self) -> bool {
        matches!(self.log_level, Some(level) if level != 0)
    }

    /// Whether request bodies should be logged.
    pub fn log_http_body_enabled(&self) -> bool {
        self.logging_enabled() && self.log_http_body == Some(true)
    }

    /// Whether the generated endpoint should be used.
    pub fn uses_default_endpoint(&self) -> bool {
        self.endpoint.as_deref().map_or(true, str::is_empty)
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_disable_ssl(mut self, disable: bool) -> Self {
        self.disable_ssl = Some(disable);
        self
    }

    pub fn with_http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn with_log_http_body(mut self, enabled: bool) -> Self {
        self.log_http_body = Some(enabled);
        self
    }

    pub fn with_log_level(mut self, level: i64) -> Self {
        self.log_level = Some(level);
        self
    }

    pub fn with_logger(mut self, logger: LogSink) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_max_retries(mut self, retries: i64) -> Self {
        self.max_retries = Some(retries);
        self
    }

    pub fn with_disable_param_validation(mut self, disable: bool) -> Self {
        self.disable_param_validation = Some(disable);
        self
    }

    pub fn with_disable_compute_checksums(mut self, disable: bool) -> Self {
        self.disable_compute_checksums = Some(disable);
        self
    }

    pub fn with_force_path_style(mut self, force: bool) -> Self {
        self.force_path_style = Some(force);
        self
    }
}
