//! Short link creation service.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{KeyValueStore, StoreError};
use crate::error::ShortenError;
use crate::utils::slug_generator::SlugGenerator;
use crate::utils::slug_policy::SlugPolicy;

/// A freshly created short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub slug: String,
    pub short_url: String,
}

/// Service creating slug to URL mappings.
///
/// Generated and caller-supplied slugs go through the same validation and the
/// same insert-if-absent call. A collision is reported as
/// [`ShortenError::SlugExists`] in both cases; generated slugs are not retried.
pub struct ShortenService<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    generator: SlugGenerator,
    policy: SlugPolicy,
    custom_domain: Option<String>,
}

impl<S: KeyValueStore + ?Sized> ShortenService<S> {
    /// Creates a new shorten service.
    ///
    /// When `custom_domain` is set it is the base of every returned short URL;
    /// otherwise the request origin passed to [`Self::shorten`] is used.
    pub fn new(
        store: Arc<S>,
        generator: SlugGenerator,
        policy: SlugPolicy,
        custom_domain: Option<String>,
    ) -> Self {
        Self {
            store,
            generator,
            policy,
            custom_domain,
        }
    }

    /// Stores `url` under `requested_slug` (or a generated slug) and returns the short URL.
    ///
    /// Empty strings count as absent for both `url` and `requested_slug`.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::MissingUrl`] if no URL was given
    /// - [`ShortenError::SlugTooLong`] / [`ShortenError::SlugInvalid`] if the slug
    ///   breaks the [`SlugPolicy`]
    /// - [`ShortenError::SlugExists`] if the slug is already bound
    /// - [`ShortenError::Storage`] on any other store failure
    pub async fn shorten(
        &self,
        url: Option<&str>,
        requested_slug: Option<&str>,
        origin: Option<&str>,
    ) -> Result<ShortUrl, ShortenError> {
        let url = url
            .filter(|u| !u.is_empty())
            .ok_or(ShortenError::MissingUrl)?;

        let slug = match requested_slug.filter(|s| !s.is_empty()) {
            Some(slug) => slug.to_string(),
            None => self.generator.generate(),
        };

        self.policy.validate(&slug)?;

        let mapping = UrlMapping::new(slug, url);
        info!(slug = %mapping.slug, url = %mapping.url, "Saving new short link");

        match self
            .store
            .insert_if_absent(&mapping.slug, &mapping.url)
            .await
        {
            Ok(()) => {}
            Err(StoreError::AlreadyExists) => {
                warn!(slug = %mapping.slug, "Slug already exists");
                return Err(ShortenError::SlugExists { slug: mapping.slug });
            }
            Err(e) => {
                error!(
                    slug = %mapping.slug,
                    url = %mapping.url,
                    error = %e,
                    "Failed to save short link"
                );
                return Err(ShortenError::Storage(e));
            }
        }

        let short_url = self.short_url(&mapping.slug, origin);

        Ok(ShortUrl {
            slug: mapping.slug,
            short_url,
        })
    }

    /// Builds the short URL for `slug`.
    ///
    /// The base is the custom domain, else `origin`, else nothing (a root-relative
    /// path). Exactly one `/` separates base and slug.
    pub fn short_url(&self, slug: &str, origin: Option<&str>) -> String {
        let base = self
            .custom_domain
            .as_deref()
            .or(origin)
            .unwrap_or_default();

        format!("{}/{}", base.trim_end_matches('/'), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockKeyValueStore;
    use crate::utils::slug_policy::DEFAULT_SLUG_PATTERN;

    fn service(store: MockKeyValueStore) -> ShortenService<MockKeyValueStore> {
        ShortenService::new(
            Arc::new(store),
            SlugGenerator::default(),
            SlugPolicy::default(),
            None,
        )
    }

    #[tokio::test]
    async fn test_shorten_with_explicit_slug() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_insert_if_absent()
            .withf(|key, value| key == "melon" && value == "https://example.com")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(store)
            .shorten(
                Some("https://example.com"),
                Some("melon"),
                Some("http://sho.rt"),
            )
            .await
            .unwrap();

        assert_eq!(result.slug, "melon");
        assert_eq!(result.short_url, "http://sho.rt/melon");
    }

    #[tokio::test]
    async fn test_shorten_generates_slug() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_insert_if_absent()
            .withf(|key, _| key.len() == 6 && key.chars().all(|c| c.is_ascii_alphanumeric()))
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(store)
            .shorten(Some("https://example.com"), None, Some("http://sho.rt"))
            .await
            .unwrap();

        assert_eq!(result.slug.len(), 6);
        assert_eq!(result.short_url, format!("http://sho.rt/{}", result.slug));
    }

    #[tokio::test]
    async fn test_empty_slug_is_generated() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_insert_if_absent()
            .withf(|key, _| key.len() == 6)
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(store)
            .shorten(Some("https://example.com"), Some(""), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_url() {
        let mut store = MockKeyValueStore::new();
        store.expect_insert_if_absent().times(0);

        let service = service(store);

        let result = service.shorten(None, Some("melon"), None).await;
        assert!(matches!(result, Err(ShortenError::MissingUrl)));

        let result = service.shorten(Some(""), Some("melon"), None).await;
        assert!(matches!(result, Err(ShortenError::MissingUrl)));
    }

    #[tokio::test]
    async fn test_slug_too_long_is_not_stored() {
        let mut store = MockKeyValueStore::new();
        store.expect_insert_if_absent().times(0);

        let slug = "a".repeat(251);
        let result = service(store)
            .shorten(Some("https://example.com"), Some(&slug), None)
            .await;

        assert!(matches!(
            result,
            Err(ShortenError::SlugTooLong {
                max_length: 250,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_invalid_slug_is_not_stored() {
        let mut store = MockKeyValueStore::new();
        store.expect_insert_if_absent().times(0);

        let result = service(store)
            .shorten(Some("https://example.com"), Some("no spaces"), None)
            .await;

        assert!(matches!(result, Err(ShortenError::SlugInvalid { .. })));
    }

    #[tokio::test]
    async fn test_generated_slug_is_validated() {
        let mut store = MockKeyValueStore::new();
        store.expect_insert_if_absent().times(0);

        let service = ShortenService::new(
            Arc::new(store),
            SlugGenerator::new(".", 4).unwrap(),
            SlugPolicy::default(),
            None,
        );

        let result = service.shorten(Some("https://example.com"), None, None).await;

        match result {
            Err(ShortenError::SlugInvalid { slug, .. }) => assert_eq!(slug, "...."),
            other => panic!("expected SlugInvalid, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slug_exists() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_insert_if_absent()
            .times(1)
            .returning(|_, _| Err(StoreError::AlreadyExists));

        let result = service(store)
            .shorten(Some("https://example.com"), Some("taken"), None)
            .await;

        match result {
            Err(ShortenError::SlugExists { slug }) => assert_eq!(slug, "taken"),
            other => panic!("expected SlugExists, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_insert_if_absent()
            .times(1)
            .returning(|_, _| Err(StoreError::Backend("connection reset".into())));

        let result = service(store)
            .shorten(Some("https://example.com"), Some("melon"), None)
            .await;

        assert!(matches!(result, Err(ShortenError::Storage(_))));
    }

    #[test]
    fn test_short_url_prefers_custom_domain() {
        let service = ShortenService::new(
            Arc::new(MockKeyValueStore::new()),
            SlugGenerator::default(),
            SlugPolicy::new(250, DEFAULT_SLUG_PATTERN).unwrap(),
            Some("https://mini.melon/".to_string()),
        );

        assert_eq!(
            service.short_url("abc", Some("http://localhost:3000")),
            "https://mini.melon/abc"
        );
    }

    #[test]
    fn test_short_url_single_separator() {
        let service = service(MockKeyValueStore::new());

        assert_eq!(
            service.short_url("abc", Some("http://sho.rt")),
            "http://sho.rt/abc"
        );
        assert_eq!(
            service.short_url("abc", Some("http://sho.rt//")),
            "http://sho.rt/abc"
        );
        assert_eq!(service.short_url("abc", None), "/abc");
    }
}
