//! Application layer: the shorten and lookup flows.
//!
//! Services consume the [`crate::domain::repositories::KeyValueStore`] trait and
//! return plain values, so they can be driven by the HTTP handlers and by the
//! admin CLI alike.
//!
//! - [`services::ShortenService`] - Slug validation and insert-if-absent
//! - [`services::LookupService`] - Slug resolution and response shaping
//! - [`response`] - Response descriptors shared by both flows

pub mod response;
pub mod services;
