use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures raised by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A statement failed; the surrounding transaction was rolled back.
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    /// The database could not be opened.
    #[error("connection error: {0}")]
    ConnectionError(String),
    /// A stored row violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("migration error: {0}")]
    MigrationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<diesel::ConnectionError> for RepositoryError {
    fn from(val: diesel::ConnectionError) -> Self {
        RepositoryError::ConnectionError(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
