//! Error handling - maps domain and store failures onto HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use corkboard_core::DomainError;
use corkboard_core::error::RepoError;
use corkboard_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to the API error envelope.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    PasswordMismatch,
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::PasswordMismatch => write!(f, "Password mismatch"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // A wrong password is user-correctable, never a server error.
            AppError::PasswordMismatch => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::new(detail.clone()),
            AppError::BadRequest(detail) => {
                ErrorResponse::new("Validation failed").with_detail(detail.clone())
            }
            AppError::PasswordMismatch => ErrorResponse::password_mismatch(),
            AppError::Conflict(detail) => ErrorResponse::new(detail.clone()),
            AppError::Internal(detail) => {
                // Log internals, respond with the generic envelope.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::PasswordMismatch => AppError::PasswordMismatch,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Post not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                AppError::Internal(format!("post store connection failure: {}", msg))
            }
            RepoError::Query(msg) => {
                AppError::Internal(format!("post store query failure: {}", msg))
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
