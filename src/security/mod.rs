//! Security subsystem.
//!
//! Authentication happens at the gateway. Services only read the identity
//! it forwards (`headers.rs`) and never verify it themselves.

pub mod headers;

pub use headers::{CallerIdentity, X_ORG_ID, X_USER_ID};
