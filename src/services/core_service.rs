//! Core service (`/api/*`).

use axum::{routing::get, Router};

use crate::http::response::ApiResponse;

pub const PING_PATH: &str = "/api/ping";
pub const PING_REPLY: &str = "core-ok";

pub fn router() -> Router {
    Router::new().route(PING_PATH, get(ping))
}

/// `GET /api/ping`
pub async fn ping() -> ApiResponse<&'static str> {
    ApiResponse::ok(PING_REPLY)
}
