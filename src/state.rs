//! Shared application state.

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{LookupService, ShortenService};
use crate::config::Config;
use crate::domain::repositories::KeyValueStore;

/// State injected into every handler.
///
/// Built once at startup from [`Config`]; everything in here is read-only.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn KeyValueStore>>,
    pub lookup_service: Arc<LookupService<dyn KeyValueStore>>,
    pub store: Arc<dyn KeyValueStore>,
    /// Read the request origin from `X-Forwarded-*` headers.
    pub behind_proxy: bool,
}

impl AppState {
    /// Builds the services over `store` with the settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slug generator or slug policy settings are invalid.
    pub fn new(store: Arc<dyn KeyValueStore>, config: &Config) -> Result<Self> {
        let shorten_service = ShortenService::new(
            store.clone(),
            config.slug_generator()?,
            config.slug_policy()?,
            config.custom_domain.clone(),
        );
        let lookup_service = LookupService::new(store.clone(), config.not_found_url.clone());

        Ok(Self {
            shorten_service: Arc::new(shorten_service),
            lookup_service: Arc::new(lookup_service),
            store,
            behind_proxy: config.behind_proxy,
        })
    }
}
