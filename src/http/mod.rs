//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → service handler
//!     → response.rs (ApiResponse envelope)  /  error.rs (ApiError → fail envelope)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiResponse;
pub use server::HttpServer;
