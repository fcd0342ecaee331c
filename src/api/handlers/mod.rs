//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod lookup;
pub mod shorten;

pub use health::health_handler;
pub use lookup::{lookup_handler, lookup_path_handler};
pub use shorten::shorten_handler;
