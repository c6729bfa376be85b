//! Uniform response envelope.
//!
//! Every endpoint of every service answers with an [`ApiResponse`], so
//! clients parse results the same way whichever backend served them.
//!
//! # Wire form
//! ```text
//! {"success": true,  "data": <T>,  "message": null}
//! {"success": false, "data": null, "message": "<description>"}
//! ```
//!
//! # Design Decisions
//! - Fields are private; the only constructors are [`ApiResponse::ok`] and
//!   [`ApiResponse::fail`], so `data` and `message` can never both be set
//! - All three keys are always serialized, absent values as `null`
//! - `fail` takes `impl Into<String>`; a null message is unrepresentable

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Response envelope returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful result carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Failed result carrying a human-readable description.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Payload; `None` for failed responses.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error description; `None` for successful responses.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consume the envelope, returning the payload if there is one.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Renders the envelope as a JSON body with `200 OK`.
///
/// Handlers that need a different status for a failure return
/// [`ApiError`](crate::http::error::ApiError) instead.
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
