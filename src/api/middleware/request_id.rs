//! Request id middleware.
//!
//! Every request gets an `x-request-id` (a UUID unless the client sent one). The
//! id is attached to the tracing span, echoed in 500 bodies as the trace id, and
//! copied to the response so callers can quote it.

use axum::http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::api::extract::X_REQUEST_ID;

/// Stamps incoming requests with an `x-request-id`.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Copies the request's `x-request-id` to the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}
