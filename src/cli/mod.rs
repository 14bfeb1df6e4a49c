//! CLI module for neodb
//!
//! Provides command-line interface for:
//! - inspect: Look up one NEO by designation or name
//! - query: Filter close approaches, print or export them

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, InspectArgs, QueryArgs};
pub use commands::{inspect, load_database, load_database_from, query, resolve_config, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
