//! CLI-specific error types
//!
//! All CLI errors end the process with a non-zero status.

use std::fmt;
use std::io;

use crate::service::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// File or stdout error
    IoError,
    /// Version data rejected
    IngestionFailed,
    /// Server could not start
    BootFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "VERSTREE_CLI_CONFIG_ERROR",
            Self::IoError => "VERSTREE_CLI_IO_ERROR",
            Self::IngestionFailed => "VERSTREE_CLI_INGESTION_FAILED",
            Self::BootFailed => "VERSTREE_CLI_BOOT_FAILED",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn ingestion_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IngestionFailed, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Ingestion(_) => Self::ingestion_failed(e.to_string()),
            _ => Self::io_error(e.to_string()),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
