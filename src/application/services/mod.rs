//! Business logic services for the application layer.

pub mod lookup_service;
pub mod shorten_service;

pub use lookup_service::LookupService;
pub use shorten_service::{ShortUrl, ShortenService};
