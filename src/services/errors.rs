use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// No session, or the session user no longer exists.
    #[error("authentication required")]
    Unauthenticated,
    /// The user is signed in but lacks the required role.
    #[error("admin access required")]
    Forbidden,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// A unique key is already taken.
    #[error("{0}")]
    Conflict(String),
    /// Request data was rejected.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
