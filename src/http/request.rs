//! Request identification.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID when the caller (usually the gateway)
//!   did not send one
//! - Keep an inbound `X-Request-Id` untouched so logs correlate across hops
//!
//! The ID is attached by `tower_http::request_id` layers wired in
//! [`server`](crate::http::server); this module supplies the header name and
//! the generator.

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Correlation header set on every request and echoed on every response.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates hyphenated UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Request ID of an incoming request, or `"unknown"` before the layer ran.
pub fn request_id_of<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
