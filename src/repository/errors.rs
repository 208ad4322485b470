use thiserror::Error;

/// Result type returned by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed row does not exist.
    #[error("record not found")]
    NotFound,
    /// A uniqueness or referential guard rejected the mutation. The message
    /// is safe to show to the admin user.
    #[error("{0}")]
    Conflict(String),
    /// Checking a connection out of the pool failed.
    #[error("database connection failed: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The database rejected a query.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
    /// A JSON column failed to serialize or parse.
    #[error("stored content is malformed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            other => RepositoryError::Database(other),
        }
    }
}

impl RepositoryError {
    /// Whether retrying the operation can plausibly succeed.
    ///
    /// Only connectivity failures qualify; everything else is deterministic.
    pub fn is_transient(&self) -> bool {
        match self {
            RepositoryError::Pool(_) => true,
            RepositoryError::Database(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ClosedConnection,
                _,
            )) => true,
            _ => false,
        }
    }
}
