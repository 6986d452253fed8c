//! sdkconf CLI Binary
//!
//! Prints effective and override service configuration.

use clap::Parser;
use sdkconf::cli::{Cli, RunContext};
use sdkconf::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("sdkconf starting");

    let context = RunContext::new(cli.workspace.clone(), cli.config.clone());
    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Precedence: CLI flags override defaults; SDKCONF_DIAG_LOG* variables are applied
/// by `init_logging` on top.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
