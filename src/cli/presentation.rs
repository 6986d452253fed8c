//! Presentation: render a configuration record as TOML or JSON.

use crate::cli::parse::OutputFormat;
use crate::config::{ServiceConfig, ServiceSettings};
use crate::error::ConfigError;
use serde_json::json;

/// Render scalar settings plus a summary of which handles are set.
pub fn format_config(config: &ServiceConfig, format: OutputFormat) -> Result<String, ConfigError> {
    let settings = ServiceSettings::from(config);
    let credentials = config.credentials.as_ref().map(|c| c.provider_name());
    let logger = config.logger.as_ref().map(|l| l.name());
    let http_client = config.http_client.is_some();

    match format {
        OutputFormat::Json => {
            let value = json!({
                "settings": settings,
                "handles": {
                    "credentials": credentials,
                    "http_client": http_client,
                    "logger": logger,
                },
            });
            serde_json::to_string_pretty(&value).map_err(|e| ConfigError::Render(e.to_string()))
        }
        OutputFormat::Toml => {
            let mut out =
                toml::to_string(&settings).map_err(|e| ConfigError::Render(e.to_string()))?;
            out.push_str(&format!(
                "# credentials: {}\n",
                credentials.unwrap_or("(unset)")
            ));
            out.push_str(&format!(
                "# http_client: {}\n",
                if http_client { "set" } else { "(unset)" }
            ));
            out.push_str(&format!("# logger: {}\n", logger.unwrap_or("(unset)")));
            Ok(out)
        }
    }
}
