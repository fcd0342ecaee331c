//! Helpers for slug handling and request inspection.
//!
//! - [`slug_generator`] - Random slug generation from a configurable alphabet
//! - [`slug_policy`] - Slug length/pattern validation and safe echoing
//! - [`extract_origin`] - Request origin extraction from the request URI and headers

pub mod extract_origin;
pub mod slug_generator;
pub mod slug_policy;
