//! BudgetIQ internal services library.
//!
//! Shared plumbing for the services that sit behind the API gateway: the
//! response envelope, the gateway identity headers, the ping and actuator
//! endpoints, and the server runtime around them.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod services;

pub use config::ServiceConfig;
pub use http::{ApiResponse, HttpServer};
pub use lifecycle::Shutdown;
pub use services::ServiceKind;
