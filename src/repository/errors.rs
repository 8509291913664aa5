use thiserror::Error;

/// Failures raised by repository implementations.
///
/// Absence is not an error: lookups return `Option` and deletes return `bool`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A stored row points at a related row that no longer exists.
    #[error("data integrity violation: {0}")]
    Integrity(String),
    /// A write referenced a related row that does not exist.
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },
    /// A unique key (slug, username) is already taken.
    #[error("{0} already exists")]
    Conflict(String),
    /// A stored invariant would be broken by the write.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// Another thread panicked while holding the store lock.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
