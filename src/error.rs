//! Error taxonomy for the shorten and lookup flows.
//!
//! Store failures are classified at the service boundary ([`StoreError`]) and
//! translated into exactly one outcome:
//!
//! - **Client errors** (4xx) describe the problem in the body
//! - **Server errors** (500) carry only a trace id; details go to the logs
//!
//! Unknown or missing slugs on lookup are not errors at all: they render the
//! not-found page (see [`crate::application::response::ResponseDescriptor::not_found`]).

use thiserror::Error;

use crate::application::response::ResponseDescriptor;
use crate::domain::repositories::StoreError;
use crate::utils::slug_policy::truncate_for_display;

/// Errors returned by [`crate::application::services::ShortenService::shorten`].
#[derive(Debug, Error)]
pub enum ShortenError {
    #[error(
        "You must specify a url in the query '?url=...' or the body '{{url:...}}' or a header 'x-url:...'"
    )]
    MissingUrl,

    #[error(
        "The slug '{}' is too large, max length is {max_length} characters",
        truncate_for_display(.slug)
    )]
    SlugTooLong { slug: String, max_length: usize },

    #[error(
        "The slug '{}' may contain only letters, numbers or dashes ({pattern})",
        truncate_for_display(.slug)
    )]
    SlugInvalid { slug: String, pattern: String },

    #[error("The slug '{}' already exists", truncate_for_display(.slug))]
    SlugExists { slug: String },

    #[error("failed to save short link")]
    Storage(#[source] StoreError),
}

impl ShortenError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingUrl | Self::SlugTooLong { .. } | Self::SlugInvalid { .. } => 400,
            Self::SlugExists { .. } => 409,
            Self::Storage(_) => 500,
        }
    }

    /// Renders the error as a response.
    ///
    /// Client errors echo their message; storage errors only expose `trace_id`.
    pub fn to_response(&self, trace_id: &str) -> ResponseDescriptor {
        match self {
            Self::Storage(_) => ResponseDescriptor::server_error(trace_id),
            _ => ResponseDescriptor::client_error(self.status(), &self.to_string()),
        }
    }
}

/// Errors returned by [`crate::application::services::LookupService::lookup`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to read short link")]
    Storage(#[source] StoreError),
}

impl LookupError {
    /// Renders the error as a server error carrying `trace_id`.
    pub fn to_response(&self, trace_id: &str) -> ResponseDescriptor {
        ResponseDescriptor::server_error(trace_id)
    }
}
