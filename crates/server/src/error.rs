//! Unified request-level error handling.
//!
//! Route handlers return `Result<T, AppError>`. Expected failures
//! (validation, bad credentials, rejected uploads) surface their own
//! message in the `{success: false, message}` JSON shape; persistence
//! and other internal failures are logged with full detail and degrade
//! to a generic message so file paths never leak to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::orders::OrderError;
use crate::services::uploads::UploadError;
use crate::store::StoreError;

/// JSON body for in-band failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed submission fields.
    #[error("{0}")]
    Validation(String),

    /// Bad admin credentials. Deliberately never says which field was wrong.
    #[error("Invalid username or password")]
    Auth,

    /// Unknown product or order id on an API route. Page routes handle
    /// not-found as redirects instead of raising this.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected image upload.
    #[error("{0}")]
    Upload(UploadError),

    /// A document could not be persisted.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    /// Session state could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Anything else unexpected.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            // A failed disk write is a persistence failure, not a fault
            // in the submitted files; it must not surface its detail.
            UploadError::Io(err) => Self::Persistence(StoreError::Io(err)),
            other => Self::Upload(other),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::MissingFields => Self::Validation(err.to_string()),
            OrderError::NotFound(id) => Self::NotFound(format!("order {id}")),
            OrderError::Store(err) => Self::Persistence(err),
        }
    }
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Upload(_) => StatusCode::BAD_REQUEST,
            Self::Auth => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Session(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal detail stays in the log, never in the response.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request error");
            "An internal server error occurred.".to_string()
        } else {
            self.to_string()
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn response_for(err: AppError) -> Response {
        err.into_response()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            response_for(AppError::Validation("missing".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(response_for(AppError::Auth).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response_for(AppError::NotFound("order DM1".to_string())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            response_for(AppError::Upload(UploadError::NoFiles)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            response_for(AppError::Internal("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_is_uniform() {
        assert_eq!(AppError::Auth.to_string(), "Invalid username or password");
    }

    #[test]
    fn test_upload_io_failure_degrades_to_internal() {
        let err: AppError = UploadError::Io(std::io::Error::other("disk full")).into();
        assert!(matches!(err, AppError::Persistence(_)));
        assert_eq!(
            response_for(err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upload_validation_failures_stay_bad_request() {
        let err: AppError = UploadError::TooManyFiles.into();
        assert!(matches!(err, AppError::Upload(_)));
        assert_eq!(response_for(err).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_order_error_mapping() {
        let err: AppError = OrderError::MissingFields.into();
        assert!(matches!(err, AppError::Validation(_)));
        let err: AppError = OrderError::NotFound("DM1".to_string()).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
