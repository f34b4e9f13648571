//! Blog Error Types
//!
//! Blog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::FieldErrors;
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Post id does not exist
    #[error("Post not found")]
    PostNotFound,

    /// Post row insert returned nothing
    #[error("Failed to create post")]
    PostCreationFailed,

    /// No post matches (id, author). Absence and foreign ownership share
    /// one message, so the response does not reveal which it was.
    #[error("Post not found or you are not authorized to update this post")]
    UpdateNotAllowed,

    /// Same gate as update, delete wording
    #[error("Post not found or you are not authorized to delete this post")]
    DeleteNotAllowed,

    /// Comment id does not exist
    #[error("Comment not found")]
    CommentNotFound,

    /// Comment belongs to a different author
    #[error("Not authorized to modify this comment")]
    CommentNotAuthorized,

    /// Request body or query failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BlogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound
            | BlogError::UpdateNotAllowed
            | BlogError::DeleteNotAllowed
            | BlogError::CommentNotFound => ErrorKind::NotFound,
            BlogError::CommentNotAuthorized => ErrorKind::Forbidden,
            BlogError::PostCreationFailed | BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::CommentNotAuthorized => {
                tracing::warn!("Comment modification denied");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<FieldErrors> for BlogError {
    fn from(errors: FieldErrors) -> Self {
        BlogError::Validation(errors.to_string())
    }
}
