use thiserror::Error;

use crate::repository::RepositoryError;

pub mod catalog;
pub mod categories;
pub mod collections;
pub mod colors;
pub mod content;
pub mod products;
pub mod technologies;

/// Result type returned by every service operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer.
///
/// Handlers translate these into the uniform `{success, error}` envelope;
/// the messages of `Form` and `Conflict` are shown to the caller verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted payload failed validation.
    #[error("{0}")]
    Form(String),
    /// A uniqueness or referential guard rejected the operation.
    #[error("{0}")]
    Conflict(String),
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
    /// The persistence layer failed; not shown to callers.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(message) => ServiceError::Conflict(message),
            other => ServiceError::Repository(other),
        }
    }
}
