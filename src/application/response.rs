//! Response descriptors shared by the shorten and lookup flows.
//!
//! Services describe their outcome as a plain `{status, headers, body}` value;
//! the HTTP layer (see `crate::api::response`) and the admin CLI render it.
//! Building every response through these helpers keeps status codes, content
//! types and the not-found page identical across both flows.

use std::collections::BTreeMap;

/// Body of the 404 page served when no not-found redirect is configured.
pub const NOT_FOUND_BODY: &str = r"404: I don't know that one ¯\_(ツ)_/¯";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const LOCATION: &str = "Location";

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

/// Status code of every redirect the service issues (temporary, method may change to GET).
pub const REDIRECT_STATUS: u16 = 302;

/// A response described independently of the HTTP framework.
///
/// Omitted fields default to status 200, no headers and no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl Default for ResponseDescriptor {
    fn default() -> Self {
        Self::new(200)
    }
}

impl ResponseDescriptor {
    /// Creates a descriptor with the given status and nothing else.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any previous value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// `text/plain` response with the given body.
    pub fn plain_text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status)
            .with_header(CONTENT_TYPE, TEXT_PLAIN)
            .with_body(body)
    }

    /// Temporary redirect to `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::new(REDIRECT_STATUS)
            .with_header(LOCATION, location)
            .with_header(CONTENT_TYPE, TEXT_HTML)
    }

    /// Client error whose body is `"<status>: <message>"`.
    pub fn client_error(status: u16, message: &str) -> Self {
        Self::plain_text(status, format!("{status}: {message}"))
    }

    /// Canonical not-found response.
    ///
    /// Redirects (temporarily) to `not_found_url` when one is configured,
    /// otherwise serves the plain 404 page.
    pub fn not_found(not_found_url: Option<&str>) -> Self {
        match not_found_url {
            Some(url) => Self::redirect(url),
            None => Self::plain_text(404, NOT_FOUND_BODY),
        }
    }

    /// 500 response exposing nothing but the trace id.
    pub fn server_error(trace_id: &str) -> Self {
        Self::plain_text(
            500,
            format!("500: Something went wrong on our side, we're looking into it. _trace {trace_id}"),
        )
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}
