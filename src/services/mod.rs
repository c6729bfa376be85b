//! Internal services behind the gateway.
//!
//! # Data Flow
//! ```text
//! gateway (auth, X-User-Id / X-Org-Id)
//!     → http::server (request ID, tracing, timeout, metrics)
//!     → core_service.rs (/api/*)  or  ai_service.rs (/ai/*)
//!     → ApiResponse envelope
//!     → client
//! ```
//!
//! # Design Decisions
//! - One binary, one service per process, chosen by [`ServiceKind`]
//! - Every service also answers the shared actuator routes

pub mod actuator;
pub mod ai_service;
pub mod core_service;

use axum::Router;
use serde::{Deserialize, Serialize};

/// Which service a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[default]
    Core,
    Ai,
}

impl ServiceKind {
    /// Name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Core => "core-service",
            ServiceKind::Ai => "ai-service",
        }
    }

    /// Path of the service's ping endpoint.
    pub fn ping_path(self) -> &'static str {
        match self {
            ServiceKind::Core => core_service::PING_PATH,
            ServiceKind::Ai => ai_service::PING_PATH,
        }
    }

    /// Literal the ping endpoint wraps in its envelope.
    pub fn ping_reply(self) -> &'static str {
        match self {
            ServiceKind::Core => core_service::PING_REPLY,
            ServiceKind::Ai => ai_service::PING_REPLY,
        }
    }

    /// Service-specific routes, without middleware or actuator routes.
    pub fn router(self) -> Router {
        match self {
            ServiceKind::Core => core_service::router(),
            ServiceKind::Ai => ai_service::router(),
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_contract() {
        assert_eq!(ServiceKind::Core.ping_path(), "/api/ping");
        assert_eq!(ServiceKind::Core.ping_reply(), "core-ok");
        assert_eq!(ServiceKind::Ai.ping_path(), "/ai/ping");
        assert_eq!(ServiceKind::Ai.ping_reply(), "ai-ok");
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            service: ServiceKind,
        }

        let w: Wrapper = toml::from_str(r#"service = "ai""#).unwrap();
        assert_eq!(w.service, ServiceKind::Ai);
        assert!(toml::from_str::<Wrapper>(r#"service = "billing""#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ServiceKind::Core.to_string(), "core-service");
        assert_eq!(ServiceKind::Ai.to_string(), "ai-service");
    }
}
