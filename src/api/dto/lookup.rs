//! DTOs for the lookup endpoints.

use crate::api::extract::first_param;

/// Query string of `GET /api/lookup`, `GET /` and `GET /{slug}`.
#[derive(Debug, Default)]
pub struct LookupQuery {
    pub slug: Option<String>,
    /// Serve the destination as plain text instead of redirecting.
    pub no_redir: Option<String>,
}

impl LookupQuery {
    /// Builds the query from decoded pairs, keeping the first occurrence of each key.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            slug: first_param(pairs, "slug").map(str::to_string),
            no_redir: first_param(pairs, "no_redir").map(str::to_string),
        }
    }
}
