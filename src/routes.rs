//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Lookup with slug from query/header (missing → not found)
//! - `GET  /{slug}`      - Short link redirect
//! - `GET  /health`      - Health check (store reachability)
//! - `/api/*`            - Lookup and shorten triggers
//!
//! Static routes take precedence over `/{slug}`, so slugs named `health` or
//! `api` are only reachable through `GET /api/lookup?slug=...`.
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` minted per request and echoed on the response
//! - **Tracing** - Structured request/response logging carrying the request id

use crate::api;
use crate::api::handlers::{health_handler, lookup_handler, lookup_path_handler};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied around the router by
/// [`crate::server::run`].
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(lookup_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(lookup_path_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}
