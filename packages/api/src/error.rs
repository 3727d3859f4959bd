// ABOUTME: API error type and its HTTP response mapping
// ABOUTME: Turns validation, not-found, and storage failures into JSON error bodies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use listkeeper_checklist::ServiceError;
use listkeeper_core::ValidationError;
use listkeeper_storage::StorageError;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

/// Main application error type that all handlers return
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Checklist item not found with ID: {0}")]
    NotFound(i64),

    #[error("Checklist item {0} cannot be updated further: version limit reached")]
    VersionExhausted(i64),

    #[error("Storage error")]
    Storage(#[source] StorageError),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => AppError::NotFound(id),
            ServiceError::VersionExhausted(id) => AppError::VersionExhausted(id),
            ServiceError::Storage(e) => AppError::Storage(e),
        }
    }
}

/// Structured error response format for API consistency
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: ErrorDetail,
    request_id: String,
}

/// Error detail structure with machine-readable codes
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<HashMap<String, String>>,
}

impl AppError {
    /// Convert AppError to appropriate HTTP status code and error code
    pub fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::VersionExhausted(_) => (StatusCode::CONFLICT, "VERSION_EXHAUSTED"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Get user-friendly error message (sanitized for external consumption)
    pub fn to_user_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::NotFound(_) | AppError::VersionExhausted(_) => self.to_string(),
            AppError::Storage(_) => "An internal server error occurred".to_string(),
        }
    }

    fn details(&self) -> Option<HashMap<String, String>> {
        match self {
            AppError::Validation(err) => Some(HashMap::from([
                ("field".to_string(), err.field.clone()),
                ("rule".to_string(), err.rule.as_str().to_string()),
            ])),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let (status_code, error_code) = self.to_status_and_code();

        // Log internal errors with full context but don't expose details
        match &self {
            AppError::Storage(err) => {
                error!(
                    request_id = %request_id,
                    storage_error = %err,
                    "Storage system error"
                );
            }
            _ => {
                info!(
                    request_id = %request_id,
                    error_code = %error_code,
                    error = %self,
                    "API error response"
                );
            }
        }

        let error_response = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: error_code.to_string(),
                message: self.to_user_message(),
                details: self.details(),
            },
            request_id,
        };

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use listkeeper_core::ValidationRule;

    #[test]
    fn test_validation_error_status() {
        let error = AppError::from(ValidationError::new("title", ValidationRule::NotBlank));
        let (status, code) = error.to_status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(error.to_user_message(), "title cannot be empty");
    }

    #[test]
    fn test_not_found_from_service_error() {
        let error = AppError::from(ServiceError::NotFound(3));
        let (status, code) = error.to_status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
        assert_eq!(error.to_user_message(), "Checklist item not found with ID: 3");
    }

    #[test]
    fn test_version_exhausted_is_conflict() {
        let error = AppError::from(ServiceError::VersionExhausted(5));
        let (status, code) = error.to_status_and_code();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "VERSION_EXHAUSTED");
    }

    #[test]
    fn test_storage_message_sanitization() {
        let error = AppError::from(ServiceError::Storage(StorageError::Io(
            std::io::Error::other("disk /var/lib/secret unreadable"),
        )));
        let (status, _) = error.to_status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let message = error.to_user_message();
        assert_eq!(message, "An internal server error occurred");
        assert!(!message.contains("secret"));
    }

    #[test]
    fn test_validation_details() {
        let error = AppError::from(ValidationError::new(
            "items[1].title",
            ValidationRule::MinLength(3),
        ));
        let details = error.details().unwrap();
        assert_eq!(details.get("field").map(String::as_str), Some("items[1].title"));
        assert_eq!(details.get("rule").map(String::as_str), Some("min_length"));
    }
}
