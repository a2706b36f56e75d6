//! API error type with `IntoResponse`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::LeagueError;

/// Error returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// Missing or invalid input, or an unresolved reference (400)
    BadRequest { message: String },

    /// The addressed resource does not exist (404)
    NotFound { message: String },

    /// Store or server failure (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound {
            message: format!("{} not found", resource),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest { message } | Self::NotFound { message } => message,
            Self::Internal { message } => {
                tracing::error!("Request failed: {}", message);
                message
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<LeagueError> for ApiError {
    fn from(e: LeagueError) -> Self {
        if e.is_client_error() {
            Self::BadRequest {
                message: e.to_string(),
            }
        } else {
            Self::Internal {
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Reference, ValidationError};
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::from(LeagueError::Validation(ValidationError::Missing {
            field: "nombre",
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unresolved_reference_is_400() {
        let err = ApiError::from(LeagueError::NotFound {
            reference: Reference::Team,
            id: 9999,
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_failure_is_500_with_message() {
        let err = ApiError::from(LeagueError::LockPoisoned);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Database lock poisoned");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found("Team").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
