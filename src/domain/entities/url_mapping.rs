//! UrlMapping entity, the only thing the service persists.

/// A slug bound to its destination.
///
/// Mappings are immutable once stored: there is no update, delete or expiry.
/// The destination is kept verbatim and is not required to be a well-formed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub slug: String,
    pub url: String,
}

impl UrlMapping {
    /// Creates a new mapping.
    pub fn new(slug: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            url: url.into(),
        }
    }

    /// First character of the slug.
    ///
    /// Storage adapters group rows by this key so that lookups do not fan out
    /// over one partition per slug. Empty slugs map to an empty partition.
    pub fn partition_key(&self) -> &str {
        partition_key(&self.slug)
    }
}

/// Returns the partition a slug belongs to (its first character).
pub fn partition_key(slug: &str) -> &str {
    match slug.char_indices().nth(1) {
        Some((end, _)) => &slug[..end],
        None => slug,
    }
}
