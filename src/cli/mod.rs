//! CLI module for verstree
//!
//! Provides command-line interface for:
//! - serve: Load versions and start the HTTP server
//! - render: Print one page of a version file as JSON
//! - tree: Print a version file as a text tree

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{render, run, run_command, serve, tree, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_records, write_json, write_text};
