//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::model::VersionRecord;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::service::{sample_records, PageQuery, VersionTreeService};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_records, write_json, write_text};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    /// JSON array of version records loaded at startup.
    /// The built-in sample set is served when absent.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }
        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }
        Ok(())
    }

    /// Records to serve at startup
    pub fn initial_records(&self) -> CliResult<Vec<VersionRecord>> {
        match &self.data_file {
            Some(path) => read_records(path),
            None => Ok(sample_records()),
        }
    }
}

pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Render {
            input,
            page,
            selected,
        } => render(&input, page, selected.as_deref()),
        Command::Tree { input } => tree(&input),
    }
}

/// Load data, then serve HTTP until the process is stopped.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(port) = port {
        config.server.port = port;
    }
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("addr", &config.server.socket_addr())],
    );

    let service = VersionTreeService::with_records(
        config.initial_records()?,
        Arc::new(MetricsRegistry::new()),
    )
    .map_err(|e| {
        log_event_with_fields(Event::BootFailed, &[("reason", &e.to_string())]);
        CliError::from(e)
    })?;

    let server = HttpServer::with_config(config.server, Arc::new(service));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// One page of `input` as JSON on stdout
pub fn render(input: &Path, page: Option<i64>, selected: Option<&str>) -> CliResult<()> {
    let service = load_service(input)?;
    let response = service.page(&PageQuery::new(page, selected))?;
    write_json(&response)
}

/// `input` as a text tree on stdout
pub fn tree(input: &Path) -> CliResult<()> {
    let service = load_service(input)?;
    write_text(&service.debug_tree().tree)
}

fn load_service(input: &Path) -> CliResult<VersionTreeService> {
    let records = read_records(input)?;
    Ok(VersionTreeService::with_records(
        records,
        Arc::new(MetricsRegistry::new()),
    )?)
}
