//! Error types for the post service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;

// == API Error Enum ==
/// Unified error type returned by every handler.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or rejected bearer token
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Unknown email or wrong password on login
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Post body larger than the configured limit
    #[error("Payload size too large: {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Malformed request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Signup with an email that is already registered
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// Credential store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Auth(_) | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::PayloadTooLarge { .. } | ApiError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::EmailTaken(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures are logged in full and reported generically
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the post service.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn error_body(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (ApiError::Auth(AuthError::InvalidToken), StatusCode::UNAUTHORIZED),
            (ApiError::Auth(AuthError::MissingToken), StatusCode::UNAUTHORIZED),
            (ApiError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                ApiError::PayloadTooLarge { size: 2, limit: 1 },
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("Post".into()), StatusCode::NOT_FOUND),
            (ApiError::EmailTaken("a@b.c".into()), StatusCode::CONFLICT),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_error_body_has_message() {
        let (status, json) = error_body(ApiError::NotFound("Post".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Post not found");

        let (_, json) = error_body(ApiError::Auth(AuthError::InvalidToken)).await;
        assert_eq!(json["error"], "Invalid token");
    }

    #[tokio::test]
    async fn test_internal_error_details_hidden() {
        let (status, json) = error_body(ApiError::Internal("secret detail".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
    }
}
