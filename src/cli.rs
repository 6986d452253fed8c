//! CLI domain: parse, route and presentation for the `sdkconf` binary.

mod parse;
mod presentation;
mod route;

pub use parse::{Cli, Commands, OutputFormat, OverrideArgs};
pub use presentation::format_config;
pub use route::RunContext;
