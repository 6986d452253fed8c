//! sdkconf: Layered Service Client Configuration
//!
//! Configuration records for cloud-service SDK clients. A record holds connection,
//! credential and logging options; override records are layered onto the
//! process-wide default to produce the configuration a client is built with.

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod logging;
