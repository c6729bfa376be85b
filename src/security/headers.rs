//! Gateway identity headers.
//!
//! The API gateway authenticates every request and forwards it with the
//! caller's user and organization ids in two fixed headers. Services trust
//! these headers as-is; verifying them is the gateway's job.
//!
//! # Responsibilities
//! - Canonical header names shared by every service
//! - [`CallerIdentity`] extractor for handlers that need the caller
//! - [`record_caller`] middleware that puts the ids on the request span

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, HeaderName, Request},
    middleware::Next,
    response::Response,
};

use crate::http::error::ApiError;

/// Header carrying the authenticated user's id.
pub const X_USER_ID: &str = "X-User-Id";

/// Header carrying the authenticated user's organization id.
pub const X_ORG_ID: &str = "X-Org-Id";

/// [`X_USER_ID`] as a typed header name.
pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");

/// [`X_ORG_ID`] as a typed header name.
pub const ORG_ID_HEADER: HeaderName = HeaderName::from_static("x-org-id");

/// Caller identity as forwarded by the gateway.
///
/// Rejects with `401` when either header is missing or empty and `400`
/// when a value is not visible ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
    pub org_id: String,
}

impl CallerIdentity {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        Ok(Self {
            user_id: required(headers, &USER_ID_HEADER, X_USER_ID)?,
            org_id: required(headers, &ORG_ID_HEADER, X_ORG_ID)?,
        })
    }
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}

fn required(
    headers: &HeaderMap,
    name: &HeaderName,
    display: &'static str,
) -> Result<String, ApiError> {
    match optional(headers, name) {
        Ok(Some(value)) => Ok(value.to_string()),
        Ok(None) => Err(ApiError::MissingIdentity(display)),
        Err(()) => Err(ApiError::InvalidIdentity(display)),
    }
}

/// Trimmed header value; empty counts as absent.
fn optional<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Result<Option<&'a str>, ()> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => {
            let value = value.to_str().map_err(|_| ())?.trim();
            Ok((!value.is_empty()).then_some(value))
        }
    }
}

/// Log which caller a request belongs to.
///
/// Requests without identity headers (health probes, direct calls inside the
/// cluster) pass through untouched.
pub async fn record_caller(request: Request<Body>, next: Next) -> Response {
    let headers = request.headers();
    let user_id = optional(headers, &USER_ID_HEADER).ok().flatten();
    let org_id = optional(headers, &ORG_ID_HEADER).ok().flatten();

    if user_id.is_some() || org_id.is_some() {
        tracing::debug!(
            user_id = user_id.unwrap_or("-"),
            org_id = org_id.unwrap_or("-"),
            path = %request.uri().path(),
            "Gateway caller"
        );
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderValue, StatusCode},
        routing::get,
        Json, Router,
    };
    use tower::ServiceExt;

    #[test]
    fn test_header_names_are_distinct_literals() {
        assert!(!X_USER_ID.is_empty());
        assert!(!X_ORG_ID.is_empty());
        assert_ne!(X_USER_ID, X_ORG_ID);
        assert_eq!(X_USER_ID, "X-User-Id");
        assert_eq!(X_ORG_ID, "X-Org-Id");
    }

    #[test]
    fn test_typed_names_match_constants() {
        assert_eq!(USER_ID_HEADER.as_str(), X_USER_ID.to_ascii_lowercase());
        assert_eq!(ORG_ID_HEADER.as_str(), X_ORG_ID.to_ascii_lowercase());
    }

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("u-17"));
        headers.insert(ORG_ID_HEADER, HeaderValue::from_static(" org-3 "));

        let identity = CallerIdentity::from_headers(&headers).unwrap();
        assert_eq!(identity.user_id, "u-17");
        assert_eq!(identity.org_id, "org-3");
    }

    #[test]
    fn test_missing_or_empty_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("u-17"));
        assert!(matches!(
            CallerIdentity::from_headers(&headers),
            Err(ApiError::MissingIdentity(X_ORG_ID))
        ));

        headers.insert(ORG_ID_HEADER, HeaderValue::from_static("   "));
        assert!(matches!(
            CallerIdentity::from_headers(&headers),
            Err(ApiError::MissingIdentity(X_ORG_ID))
        ));
    }

    #[test]
    fn test_non_ascii_is_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_bytes(b"caf\xe9").unwrap());
        headers.insert(ORG_ID_HEADER, HeaderValue::from_static("org-3"));
        assert!(matches!(
            CallerIdentity::from_headers(&headers),
            Err(ApiError::InvalidIdentity(X_USER_ID))
        ));
    }

    fn whoami_router() -> Router {
        Router::new()
            .route(
                "/whoami",
                get(|caller: CallerIdentity| async move {
                    Json(serde_json::json!({ "user": caller.user_id, "org": caller.org_id }))
                }),
            )
            .layer(axum::middleware::from_fn(record_caller))
    }

    #[tokio::test]
    async fn test_extractor_in_handler() {
        let request = Request::builder()
            .uri("/whoami")
            .header(X_USER_ID, "u-1")
            .header(X_ORG_ID, "o-1")
            .body(Body::empty())
            .unwrap();

        let response = whoami_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "user": "u-1", "org": "o-1" }));
    }

    #[tokio::test]
    async fn test_extractor_rejection_is_fail_envelope() {
        let request = Request::builder()
            .uri("/whoami")
            .header(X_ORG_ID, "o-1")
            .body(Body::empty())
            .unwrap();

        let response = whoami_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["message"], "Missing required header X-User-Id");
    }
}
