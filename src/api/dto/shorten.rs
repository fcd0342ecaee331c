//! DTOs for the shorten endpoint.

use serde::Deserialize;

use crate::api::extract::first_param;

/// Query string of `GET|POST /api/shorten`.
#[derive(Debug, Default)]
pub struct ShortenQuery {
    pub url: Option<String>,
    pub slug: Option<String>,
}

impl ShortenQuery {
    /// Builds the query from decoded pairs, keeping the first occurrence of each key.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            url: first_param(pairs, "url").map(str::to_string),
            slug: first_param(pairs, "slug").map(str::to_string),
        }
    }
}

/// Optional JSON body of `POST /api/shorten`.
///
/// ```json
/// { "url": "https://example.com", "slug": "my-link" }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ShortenBody {
    pub url: Option<String>,
    pub slug: Option<String>,
}

impl ShortenBody {
    /// Parses a request body leniently.
    ///
    /// Empty, non-JSON or wrongly shaped bodies yield an empty [`ShortenBody`]
    /// so that query and header parameters still apply.
    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }

        serde_json::from_slice(bytes).unwrap_or_default()
    }
}
