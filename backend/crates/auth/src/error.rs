//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong username or password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Access denied. No token provided.")]
    MissingToken,

    /// Token is malformed, tampered with, or expired
    #[error("Invalid token.")]
    TokenInvalid,

    /// Token was valid but the embedded admin no longer exists
    #[error("Admin not found")]
    AdminNotFound,

    /// Required request field missing or blank
    #[error("{0}")]
    MissingField(&'static str),

    /// New password failed policy validation
    #[error("{0}")]
    PasswordPolicy(String),

    /// Password change requested without the current password
    #[error("Current password is required to set a new password")]
    CurrentPasswordRequired,

    /// Presented current password does not match the stored hash
    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,

    /// Username collides with a different admin row
    #[error("Username already exists")]
    UsernameTaken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::TokenInvalid | AuthError::AdminNotFound => StatusCode::FORBIDDEN,
            AuthError::MissingField(_)
            | AuthError::PasswordPolicy(_)
            | AuthError::CurrentPasswordRequired
            | AuthError::CurrentPasswordIncorrect
            | AuthError::UsernameTaken => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::TokenInvalid | AuthError::AdminNotFound => ErrorKind::Forbidden,
            // Username collisions surface as 400, not 409
            AuthError::MissingField(_)
            | AuthError::PasswordPolicy(_)
            | AuthError::CurrentPasswordRequired
            | AuthError::CurrentPasswordIncorrect
            | AuthError::UsernameTaken => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures collapse to a generic message; details
    /// stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Rejected invalid bearer token");
            }
            AuthError::AdminNotFound => {
                tracing::warn!("Token for a deleted administrator");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
