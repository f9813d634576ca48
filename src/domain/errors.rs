use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("Invalid status transition: {0}")]
    InvalidStatusTransition(String),
    #[error("Hierarchy violation: {0}")]
    HierarchyViolation(String),
    #[error("Out of range: {0}")]
    OutOfRange(String),
    #[error("Validation error: {0}")]
    ValidationFailure(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotFound(_) => "not_found",
            DomainError::InvalidStatusTransition(_) => "invalid_status_transition",
            DomainError::HierarchyViolation(_) => "hierarchy_violation",
            DomainError::OutOfRange(_) => "out_of_range",
            DomainError::ValidationFailure(_) => "validation_failure",
            DomainError::Storage(_) => "storage",
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound("Record".to_string()),
            sqlx::Error::Database(db_err) => {
                DomainError::Storage(format!("Database error: {}", db_err.message()))
            }
            other => DomainError::Storage(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Storage(format!("Malformed stored JSON: {}", err))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
