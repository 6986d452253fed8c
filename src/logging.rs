//! Logging
//!
//! Two things live here. [`LogSink`] is the opaque writer handle carried in the
//! `logger` field of a service configuration; SDK log output goes there.
//! [`init_logging`] installs the `tracing` subscriber used for this crate's own
//! diagnostics, configured from [`LoggingConfig`] and `SDKCONF_DIAG_LOG*` variables.

use crate::error::ConfigError;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, OnceLock};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{
    fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Diagnostics filter directive (e.g. `debug`, `sdkconf=trace`).
pub const DIAG_LOG_ENV: &str = "SDKCONF_DIAG_LOG";
/// Diagnostics format: json or text.
pub const DIAG_LOG_FORMAT_ENV: &str = "SDKCONF_DIAG_LOG_FORMAT";
/// Diagnostics output: stdout or stderr.
pub const DIAG_LOG_OUTPUT_ENV: &str = "SDKCONF_DIAG_LOG_OUTPUT";

/// Shared, writable log destination.
///
/// Clones write to the same underlying stream; writes are serialized.
#[derive(Clone)]
pub struct LogSink {
    name: Arc<str>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl LogSink {
    pub fn new<W: Write + Send + 'static>(name: &str, writer: W) -> Self {
        Self {
            name: Arc::from(name),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// The process-wide standard output sink.
    pub fn stdout() -> &'static LogSink {
        static STDOUT_SINK: OnceLock<LogSink> = OnceLock::new();
        STDOUT_SINK.get_or_init(|| LogSink::new("stdout", std::io::stdout()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one line to the sink.
    pub fn write_line(&self, line: &str) -> Result<(), ConfigError> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&self) -> Result<(), ConfigError> {
        self.writer.lock().flush()?;
        Ok(())
    }

    pub fn same_sink(&self, other: &LogSink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl PartialEq for LogSink {
    fn eq(&self, other: &Self) -> bool {
        self.same_sink(other)
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink").field("name", &self.name).finish()
    }
}

/// Diagnostics logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize diagnostics logging.
///
/// Environment variables (SDKCONF_DIAG_LOG, SDKCONF_DIAG_LOG_FORMAT,
/// SDKCONF_DIAG_LOG_OUTPUT) take precedence over `config`, which takes precedence
/// over defaults. These only affect this crate's diagnostics; `SDKCONF_LOG_LEVEL`
/// and `SDKCONF_LOG_HTTP_BODY` are service settings read by `ConfigLoader`.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ConfigError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let writer = || match output {
        Output::Stdout => BoxMakeWriter::new(std::io::stdout),
        Output::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    let base_subscriber = Registry::default().with(filter);
    let result = if format == "json" {
        base_subscriber
            .with(
                tracing_fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer()),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                tracing_fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer()),
            )
            .try_init()
    };

    result.map_err(|e| ConfigError::Logging(format!("Failed to install subscriber: {}", e)))
}

fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env(DIAG_LOG_ENV) {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);
    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| ConfigError::Logging(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    Ok(filter)
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ConfigError> {
    if let Ok(format) = std::env::var(DIAG_LOG_FORMAT_ENV) {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(ConfigError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<Output, ConfigError> {
    if let Ok(output) = std::env::var(DIAG_LOG_OUTPUT_ENV) {
        return parse_output(&output);
    }

    parse_output(config.map(|c| c.output.as_str()).unwrap_or("stderr"))
}

fn parse_output(output: &str) -> Result<Output, ConfigError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        _ => Err(ConfigError::Logging(format!(
            "Invalid log output: {} (must be 'stdout' or 'stderr')",
            output
        ))),
    }
}
