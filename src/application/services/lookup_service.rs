//! Slug resolution service.

use std::sync::Arc;

use tracing::{debug, error};
use url::Url;

use crate::application::response::ResponseDescriptor;
use crate::domain::repositories::{KeyValueStore, StoreError};
use crate::error::LookupError;

/// Service resolving slugs to responses.
///
/// # Response Shape
///
/// - Missing or unknown slug: the not-found response
/// - Stored value is not an absolute URL: 200 with the raw value as plain text
/// - `no_redirect` requested: 200 with the URL as plain text
/// - Otherwise: 302 to the stored URL
///
/// Every path performs at most one store read and never mutates anything.
pub struct LookupService<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    not_found_url: Option<String>,
}

impl<S: KeyValueStore + ?Sized> LookupService<S> {
    /// Creates a new lookup service.
    ///
    /// Unknown slugs redirect to `not_found_url` when it is set. The URL is
    /// encoded for the `Location` header the same way stored destinations are.
    pub fn new(store: Arc<S>, not_found_url: Option<String>) -> Self {
        Self {
            store,
            not_found_url: not_found_url.map(header_location),
        }
    }

    /// Resolves `slug` into a response.
    ///
    /// A missing (or empty) slug is treated exactly like an unknown one.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Storage`] if the store fails for any reason other
    /// than the slug being unbound.
    pub async fn lookup(
        &self,
        slug: Option<&str>,
        no_redirect: bool,
    ) -> Result<ResponseDescriptor, LookupError> {
        let Some(slug) = slug.filter(|s| !s.is_empty()) else {
            debug!("Lookup without slug");
            return Ok(self.not_found());
        };

        match self.store.get(slug).await {
            Ok(value) => Ok(shape_response(value, no_redirect)),
            Err(StoreError::NotFound) => {
                debug!(slug, "Slug not found");
                Ok(self.not_found())
            }
            Err(e) => {
                error!(slug, error = %e, "Failed to read short link");
                Err(LookupError::Storage(e))
            }
        }
    }

    /// The response for missing and unknown slugs.
    pub fn not_found(&self) -> ResponseDescriptor {
        ResponseDescriptor::not_found(self.not_found_url.as_deref())
    }
}

/// Decides between plain text and redirect for a stored value.
fn shape_response(value: String, no_redirect: bool) -> ResponseDescriptor {
    let Ok(parsed) = Url::parse(&value) else {
        return ResponseDescriptor::plain_text(200, value);
    };

    if no_redirect {
        return ResponseDescriptor::plain_text(200, value);
    }

    // Non-ASCII values cannot travel in a header verbatim; send the encoded form
    let location = if is_header_safe(&value) {
        value
    } else {
        parsed.into()
    };

    ResponseDescriptor::redirect(location)
}

/// Percent-encodes a URL that cannot be sent verbatim in a header.
fn header_location(value: String) -> String {
    if is_header_safe(&value) {
        return value;
    }

    match Url::parse(&value) {
        Ok(parsed) => parsed.into(),
        Err(_) => value,
    }
}

fn is_header_safe(value: &str) -> bool {
    value.bytes().all(|b| (0x20..0x7f).contains(&b))
}
