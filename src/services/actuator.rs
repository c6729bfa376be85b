//! Actuator routes shared by every service.
//!
//! Load balancers, the orchestrator and the web UI poll
//! `GET /actuator/health` and read its `status` field. The body is the bare
//! actuator shape, not an [`ApiResponse`](crate::http::response::ApiResponse).

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const HEALTH_PATH: &str = "/actuator/health";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

pub fn router() -> Router {
    Router::new().route(HEALTH_PATH, get(health))
}

/// The process answers, so it is up; nothing downstream is probed.
pub async fn health() -> Json<Health> {
    Json(Health { status: "UP" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_is_up() {
        let Json(health) = health().await;
        assert_eq!(serde_json::to_value(&health).unwrap(), serde_json::json!({"status": "UP"}));
    }
}
