//! Domain layer containing the persisted entity and the storage contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::UrlMapping`] slug/URL pair
//! - [`repositories`] - The [`repositories::KeyValueStore`] trait implemented by the
//!   storage adapters in [`crate::infrastructure::store`]
//!
//! # Lookup Flow
//!
//! 1. HTTP handler extracts the slug from the path, query, or `x-slug` header
//! 2. [`crate::application::services::LookupService`] performs a single store read
//! 3. The result is shaped into a [`crate::application::response::ResponseDescriptor`]
//!    (redirect, plain text, or not-found page)

pub mod entities;
pub mod repositories;
