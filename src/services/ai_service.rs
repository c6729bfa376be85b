//! AI service (`/ai/*`).

use axum::{routing::get, Router};

use crate::http::response::ApiResponse;

pub const PING_PATH: &str = "/ai/ping";
pub const PING_REPLY: &str = "ai-ok";

pub fn router() -> Router {
    Router::new().route(PING_PATH, get(ping))
}

/// `GET /ai/ping`
pub async fn ping() -> ApiResponse<&'static str> {
    ApiResponse::ok(PING_REPLY)
}
