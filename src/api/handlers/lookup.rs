//! Handlers for slug lookup.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
};

use crate::api::dto::lookup::LookupQuery;
use crate::api::extract::{X_SLUG, first_present, header_str, is_flag_set, trace_id};
use crate::application::response::ResponseDescriptor;
use crate::state::AppState;

/// Resolves a slug given in the query string or the `x-slug` header.
///
/// # Endpoints
///
/// - `GET /api/lookup?slug=...`
/// - `GET /?slug=...`
///
/// # Query Parameters
///
/// - `slug` - Slug to resolve (falls back to the `x-slug` header)
/// - `no_redir` - Serve the destination as plain text instead of redirecting
///
/// Repeated parameters are allowed; the first occurrence wins.
///
/// # Responses
///
/// - **302 Found**: Redirect to the stored URL
/// - **200 OK**: Stored value as `text/plain` (non-URL value or `no_redir`)
/// - **404 Not Found** / **302 Found**: Missing or unknown slug (plain page, or
///   redirect to `NOT_FOUND_URL` when configured)
/// - **500 Internal Server Error**: Store failure, body carries the trace id
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> ResponseDescriptor {
    let query = LookupQuery::from_pairs(&pairs);
    let slug = first_present([query.slug.as_deref(), header_str(&headers, X_SLUG)]);

    resolve(&state, slug, query.no_redir.as_deref(), &headers).await
}

/// Resolves the slug given as the path.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Behaves like [`lookup_handler`]; `no_redir` is still read from the query.
pub async fn lookup_path_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> ResponseDescriptor {
    let query = LookupQuery::from_pairs(&pairs);
    resolve(&state, Some(&slug), query.no_redir.as_deref(), &headers).await
}

async fn resolve(
    state: &AppState,
    slug: Option<&str>,
    no_redir: Option<&str>,
    headers: &HeaderMap,
) -> ResponseDescriptor {
    match state
        .lookup_service
        .lookup(slug, is_flag_set(no_redir))
        .await
    {
        Ok(response) => response,
        Err(e) => e.to_response(&trace_id(headers)),
    }
}
