//! HTTP layer translating requests into service calls.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization types
//! - [`extract`] - Parameter lookup across query, body and headers
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing and request ids
//! - [`response`] - Rendering of [`crate::application::response::ResponseDescriptor`]
//! - [`routes`] - Route configuration under `/api`

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
