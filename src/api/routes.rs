//! API route configuration.

use crate::api::handlers::{lookup_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET      /lookup`   - Resolve a slug (query `slug` or header `x-slug`)
/// - `GET|POST /shorten`  - Create a short link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/lookup", get(lookup_handler))
        .route("/shorten", get(shorten_handler).post(shorten_handler))
}
