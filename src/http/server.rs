//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router for the configured service
//! - Wire up middleware (request ID, tracing, timeout, metrics, caller logging)
//! - Serve on a listener until shutdown, draining in-flight requests

use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::Request,
    middleware,
    BoxError, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::error::{self, ApiError};
use crate::http::request::{request_id_of, MakeRequestUuid, X_REQUEST_ID};
use crate::observability::metrics::track_metrics;
use crate::security::headers::record_caller;
use crate::services::actuator;

/// HTTP server for one internal service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// Run the server until `shutdown` fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let service = self.config.service;
        tracing::info!(
            service = %service,
            address = %addr,
            ping = service.ping_path(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!(service = %service, "Shutdown signal received, draining");
            })
            .await?;

        tracing::info!(service = %service, "HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The fully layered router, for driving in-process.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Build the router for the configured service with all middleware layers.
pub fn build_router(config: &ServiceConfig) -> Router {
    let routes = config.service.router().merge(actuator::router());
    with_middleware(routes, config)
}

/// Wrap `routes` in the shared fallbacks and middleware stack.
pub fn with_middleware(routes: Router, config: &ServiceConfig) -> Router {
    let timeout = Duration::from_secs(config.timeouts.request_secs);

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %request_id_of(request),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(timeout)
        .layer(middleware::from_fn(record_caller));

    routes
        .route_layer(middleware::from_fn(track_metrics))
        .method_not_allowed_fallback(error::method_not_allowed)
        .fallback(error::not_found)
        .layer(layers)
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(format!("Unhandled middleware error: {err}"))
    }
}
