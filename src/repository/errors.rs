use thiserror::Error;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// A pooled connection could not be checked out.
    #[error("connection pool error: {0}")]
    Pool(String),
    /// A statement failed to execute.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A value being persisted could not be encoded.
    #[error("failed to encode stored value: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The in-memory catalog lock was poisoned by a panicking writer.
    #[error("catalog lock poisoned")]
    Poisoned,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
