//! HTTP-edge errors.
//!
//! Internal failures are typed; they become a failed [`ApiResponse`] with a
//! matching status code only when they reach the client.

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::http::response::ApiResponse;

/// Errors surfaced to clients as a failed envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No handler found for {method} {path}")]
    NotFound { method: Method, path: String },

    #[error("Method {method} is not supported for {path}")]
    MethodNotAllowed { method: Method, path: String },

    #[error("Missing required header {0}")]
    MissingIdentity(&'static str),

    #[error("Header {0} is not valid visible ASCII")]
    InvalidIdentity(&'static str),

    #[error("Request timed out")]
    Timeout,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingIdentity(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidIdentity(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }
        (status, ApiResponse::<()>::fail(self.to_string())).into_response()
    }
}

/// Fallback for routes no service registers.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}

/// Fallback for known routes called with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}
