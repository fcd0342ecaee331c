//! Core domain entities.
//!
//! - [`UrlMapping`] - A slug bound to its destination

pub mod url_mapping;

pub use url_mapping::UrlMapping;
