//! Custom error types for the API service

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// A business rule rejected the operation
    #[error("{0}")]
    BusinessRule(&'static str),

    /// The caller does not own the resource
    #[error("{0}")]
    Authorization(&'static str),

    /// Missing or invalid credentials
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Resource not found
    #[error("{0}")]
    NotFound(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

pub const BANNER_NOT_FOUND: &str = "Banner file not found";
pub const OWNER_NOT_FOUND: &str = "User not found";
pub const REFERENCE_NOT_FOUND: &str = "Referenced record not found";

/// Client-facing message for a write that referenced a missing row
fn missing_reference_message(constraint: &str) -> &'static str {
    if constraint.contains("file_id") {
        BANNER_NOT_FOUND
    } else if constraint.contains("user_id") {
        OWNER_NOT_FOUND
    } else {
        REFERENCE_NOT_FOUND
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::BusinessRule(_)
            | ApiError::Database(DatabaseError::ForeignKeyViolation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Authorization(_) | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = match &self {
            ApiError::Database(DatabaseError::ForeignKeyViolation(constraint)) => {
                missing_reference_message(constraint).to_string()
            }
            ApiError::Database(e) => {
                error!("{}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        if status.is_client_error() {
            warn!(status = status.as_u16(), "{}", error_message);
        }

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("title is a required field".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BusinessRule("Past dates are not permitted").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Authorization("Not authorized.").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Meetup not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DatabaseError::Migration("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let response = ApiError::from(DatabaseError::Migration("secret detail".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_foreign_key_violation_is_a_bad_request() {
        let response =
            ApiError::from(DatabaseError::ForeignKeyViolation("meetups_file_id_fkey".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": BANNER_NOT_FOUND }));
    }

    #[test]
    fn test_missing_reference_message() {
        assert_eq!(missing_reference_message("meetups_file_id_fkey"), BANNER_NOT_FOUND);
        assert_eq!(missing_reference_message("meetups_user_id_fkey"), OWNER_NOT_FOUND);
        assert_eq!(missing_reference_message(""), REFERENCE_NOT_FOUND);
    }
}
