//! Error types for request handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkable_registry::LinkableError;
use thiserror::Error;
use tracing::error;

/// Errors returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Error raised by the registry or an item type.
    #[error(transparent)]
    Registry(#[from] LinkableError),
}

impl ApiError {
    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Registry(err) => match err {
                LinkableError::ValidationError(_) => StatusCode::BAD_REQUEST,
                LinkableError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                LinkableError::BackendError(_) | LinkableError::ProviderError { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                LinkableError::NotImplemented(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = %status, error = %self, "Request failed");
        }

        (
            status,
            Json(serde_json::json!({
                "status": "error",
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
