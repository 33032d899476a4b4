//! CLI argument definitions using clap
//!
//! Commands:
//! - verstree serve [--config <path>] [--port <port>]
//! - verstree render --input <path> [--page <n>] [--selected <id>]
//! - verstree tree --input <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// verstree - paginated version tree service
#[derive(Parser, Debug)]
#[command(name = "verstree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print one page of a version file as JSON
    Render {
        /// JSON array of version records
        #[arg(long)]
        input: PathBuf,

        /// 1-based page number; out-of-range values are clamped
        #[arg(long, allow_hyphen_values = true)]
        page: Option<i64>,

        /// Version id to highlight along with its ancestors
        #[arg(long)]
        selected: Option<String>,
    },

    /// Print a version file as a text tree
    Tree {
        /// JSON array of version records
        #[arg(long)]
        input: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
