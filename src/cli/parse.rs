//! CLI parse: clap types for sdkconf. No behavior beyond flag-to-record mapping.

use crate::config::ServiceConfig;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sdkconf CLI - inspect layered service client configuration
#[derive(Parser)]
#[command(name = "sdkconf")]
#[command(about = "Inspect layered service client configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (replaces global, workspace and environment layers)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostics
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Diagnostics log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Diagnostics log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective configuration (defaults, loaded layers, then flags)
    Show {
        #[command(flatten)]
        overrides: OverrideArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },
    /// Show only the settings set by configuration files and environment
    Overrides {
        #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },
    /// Print the global configuration file path
    ConfigPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}

/// Per-invocation overrides. Unset flags leave the layer below untouched.
#[derive(Args, Debug, Default, Clone)]
pub struct OverrideArgs {
    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub disable_ssl: Option<bool>,

    #[arg(long)]
    pub log_http_body: Option<bool>,

    /// SDK log level written to the configuration (0 disables SDK logging)
    #[arg(long)]
    pub sdk_log_level: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub max_retries: Option<i64>,

    #[arg(long)]
    pub disable_param_validation: Option<bool>,

    #[arg(long)]
    pub disable_compute_checksums: Option<bool>,

    #[arg(long)]
    pub force_path_style: Option<bool>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> ServiceConfig {
        ServiceConfig {
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
            disable_ssl: self.disable_ssl,
            log_http_body: self.log_http_body,
            log_level: self.sdk_log_level,
            max_retries: self.max_retries,
            disable_param_validation: self.disable_param_validation,
            disable_compute_checksums: self.disable_compute_checksums,
            force_path_style: self.force_path_style,
            ..ServiceConfig::default()
        }
    }
}
