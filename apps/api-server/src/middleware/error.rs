//! Error handling - maps domain and repository failures onto HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
    Validation(Vec<String>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(message) => ErrorResponse::not_found(message),
            AppError::BadRequest(message) => ErrorResponse::bad_request(message),
            AppError::Conflict(message) => ErrorResponse::conflict(message),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            AppError::Validation(errors) => ErrorResponse::bad_request(errors.join(", ")),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<quill_core::DomainError> for AppError {
    fn from(err: quill_core::DomainError) -> Self {
        match err {
            quill_core::DomainError::Validation(msg) => AppError::BadRequest(msg),
            quill_core::DomainError::Duplicate(msg) => AppError::Conflict(msg),
        }
    }
}

impl From<quill_core::RepoError> for AppError {
    fn from(err: quill_core::RepoError) -> Self {
        match err {
            quill_core::RepoError::Constraint(msg) => AppError::Conflict(msg),
            // Logged once when the response is built; the body stays generic.
            quill_core::RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            quill_core::RepoError::Query(msg) => {
                AppError::Internal(format!("Database query error: {}", msg))
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
