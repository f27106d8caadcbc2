// Storage error taxonomy
//
// Every failure coming out of the store is classified as either
// "could not reach / could not get a connection" or "the store said no".

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors surfaced by the storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    /// Pool exhausted, pool closed, or the store is unreachable
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Constraint violation, type mismatch, or malformed statement.
    /// Carries the store's diagnostic message.
    #[error("storage rejected statement: {0}")]
    Rejected(String),
}

impl StorageError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StorageError::Unavailable(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        StorageError::Rejected(msg.into())
    }

    /// True when the failure is about reaching the store rather than the statement
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::Configuration(_) => StorageError::Unavailable(err.to_string()),
            sqlx::Error::Database(db_err) => StorageError::Rejected(db_err.message().to_string()),
            other => StorageError::Rejected(other.to_string()),
        }
    }
}
