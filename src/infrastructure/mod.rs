//! Infrastructure layer for external integrations.
//!
//! This layer implements the [`crate::domain::repositories::KeyValueStore`]
//! contract on top of concrete backends.
//!
//! # Modules
//!
//! - [`store`] - In-memory, PostgreSQL and Redis stores plus backend selection
pub mod store;
