//! Domain and store error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Post store errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store query failed: {0}")]
    Query(String),

    #[error("Post not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
