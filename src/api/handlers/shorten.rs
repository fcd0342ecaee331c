//! Handler for link shortening endpoint.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, Uri},
};

use crate::api::dto::shorten::{ShortenBody, ShortenQuery};
use crate::api::extract::{X_SLUG, X_URL, first_present, header_str, trace_id};
use crate::application::response::ResponseDescriptor;
use crate::state::AppState;
use crate::utils::extract_origin::extract_origin;

/// Creates a short link.
///
/// # Endpoint
///
/// `GET|POST /api/shorten`
///
/// # Parameters
///
/// Each parameter is taken from the first non-empty source:
///
/// - `url` (required): query `?url=...`, JSON body `{"url": ...}`, header `x-url`
/// - `slug` (optional): query `?slug=...`, JSON body `{"slug": ...}`, header `x-slug`
///
/// Without a slug a random one is generated. Repeated query parameters are
/// allowed; the first occurrence wins.
///
/// # Response
///
/// **200 OK** with the short URL as plain text:
///
/// ```text
/// https://sho.rt/Ab3dE9
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: Missing URL, slug too long, slug not matching the pattern
/// - **409 Conflict**: Slug already exists
/// - **500 Internal Server Error**: Store failure, body carries the trace id
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> ResponseDescriptor {
    let query = ShortenQuery::from_pairs(&pairs);
    let body = ShortenBody::parse(&body);

    let url = first_present([
        query.url.as_deref(),
        body.url.as_deref(),
        header_str(&headers, X_URL),
    ]);
    let slug = first_present([
        query.slug.as_deref(),
        body.slug.as_deref(),
        header_str(&headers, X_SLUG),
    ]);
    let origin = extract_origin(&headers, &uri, state.behind_proxy);

    match state
        .shorten_service
        .shorten(url, slug, origin.as_deref())
        .await
    {
        Ok(short) => ResponseDescriptor::plain_text(200, short.short_url),
        Err(e) => e.to_response(&trace_id(&headers)),
    }
}
