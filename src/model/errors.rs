//! Tree error types
//!
//! Error codes:
//! - VERSTREE_CYCLE (FATAL at ingestion)
//! - VERSTREE_VALIDATION (FATAL at ingestion)
//!
//! Unresolved parents, out-of-range pages and unknown selections are not
//! errors and have no code here.

use thiserror::Error;

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised while ingesting or walking a version tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Parent pointers do not form a forest
    #[error("Cycle detected at version '{id}'")]
    Cycle { id: String },

    /// A record is missing a required field or carries a malformed value
    #[error("Invalid version '{id}': {reason}")]
    Validation { id: String, reason: String },
}

impl TreeError {
    pub fn cycle(id: impl Into<String>) -> Self {
        TreeError::Cycle { id: id.into() }
    }

    pub fn validation(id: impl Into<String>, reason: impl Into<String>) -> Self {
        TreeError::Validation {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TreeError::Cycle { .. } => "VERSTREE_CYCLE",
            TreeError::Validation { .. } => "VERSTREE_VALIDATION",
        }
    }

    /// Identifier of the offending version
    pub fn version_id(&self) -> &str {
        match self {
            TreeError::Cycle { id } | TreeError::Validation { id, .. } => id,
        }
    }

    /// Both variants abort the whole build; no partial result is produced.
    pub fn is_fatal(&self) -> bool {
        true
    }
}
