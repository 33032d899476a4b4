//! Service error types

use thiserror::Error;

use crate::model::TreeError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Ingestion failed; nothing was published
    #[error("Ingestion rejected: {0}")]
    Ingestion(TreeError),

    /// A published snapshot violated a tree invariant while being read
    #[error("Internal invariant violated: {0}")]
    Invariant(TreeError),

    #[error("Version not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Ingestion(_) => 422,
            ServiceError::Invariant(_) => 500,
            ServiceError::NotFound(_) => 404,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Ingestion(e) => e.code(),
            ServiceError::Invariant(_) => "VERSTREE_INTERNAL",
            ServiceError::NotFound(_) => "VERSTREE_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceError::Ingestion(TreeError::cycle("a")).status_code(), 422);
        assert_eq!(ServiceError::Invariant(TreeError::cycle("a")).status_code(), 500);
        assert_eq!(ServiceError::NotFound("a".into()).status_code(), 404);
    }

    #[test]
    fn test_ingestion_keeps_tree_code() {
        let err = ServiceError::Ingestion(TreeError::validation("v1", "name is required"));
        assert_eq!(err.code(), "VERSTREE_VALIDATION");
        assert!(err.to_string().contains("v1"));
    }
}
