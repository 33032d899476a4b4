//! File and stdout JSON handling for the CLI

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::VersionRecord;

use super::errors::{CliError, CliResult};

/// Read a JSON array of version records from a file
pub fn read_records(path: &Path) -> CliResult<Vec<VersionRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))?;

    let records: Vec<VersionRecord> = serde_json::from_str(&content)
        .map_err(|e| CliError::io_error(format!("Invalid version file {}: {}", path.display(), e)))?;

    Ok(records)
}

/// Write a value to stdout as pretty JSON
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write plain text to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;

    Ok(())
}
