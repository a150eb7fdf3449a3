//! Feedback Error Types
//!
//! This module provides feedback-specific error variants that
//! integrate with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Feedback-specific result type alias
pub type FeedbackResult<T> = Result<T, FeedbackError>;

/// Feedback-specific error variants
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// Submission failed validation
    #[error("{0}")]
    Validation(&'static str),

    /// Status value outside the moderation state machine
    #[error("Invalid status. Must be approved, rejected, or pending")]
    InvalidStatus,

    /// No entry with the requested id
    #[error("Feedback not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FeedbackError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FeedbackError::Validation(_) | FeedbackError::InvalidStatus => StatusCode::BAD_REQUEST,
            FeedbackError::NotFound => StatusCode::NOT_FOUND,
            FeedbackError::Database(_) | FeedbackError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedbackError::Validation(_) | FeedbackError::InvalidStatus => ErrorKind::BadRequest,
            FeedbackError::NotFound => ErrorKind::NotFound,
            FeedbackError::Database(_) | FeedbackError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures collapse to a generic message; details
    /// stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            FeedbackError::Database(_) | FeedbackError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            FeedbackError::Database(e) => {
                tracing::error!(error = %e, "Feedback database error");
            }
            FeedbackError::Internal(msg) => {
                tracing::error!(message = %msg, "Feedback internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Feedback request rejected");
            }
        }
    }
}

impl IntoResponse for FeedbackError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
