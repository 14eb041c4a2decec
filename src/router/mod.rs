//! Routing module for the café lookup service

use crate::cafe::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        tracing::debug!(method = %req.method(), uri = %req.uri(), "REQ");
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!(status = %res.status(), "RES (Error)");
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .route("/health", get(health))
        .merge(crate::cafe::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Liveness check. Does not inspect the catalog.
async fn health() -> &'static str {
    "ok"
}
