#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use minimelon::config::Config;
use minimelon::domain::repositories::{KeyValueStore, StoreError};
use minimelon::infrastructure::store::MemoryStore;
use minimelon::routes::app_router;
use minimelon::state::AppState;
use std::sync::Arc;

/// A store whose backend is always down.
pub struct DownStore;

#[async_trait]
impl KeyValueStore for DownStore {
    async fn get(&self, _key: &str) -> Result<String, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn insert_if_absent(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state(store: Arc<dyn KeyValueStore>, config: &Config) -> AppState {
    AppState::new(store, config).unwrap()
}

/// Full application router over `store`.
pub fn make_server_with(store: Arc<dyn KeyValueStore>, config: &Config) -> TestServer {
    let app = app_router(create_test_state(store, config));
    TestServer::new(app).unwrap()
}

/// Full application router over a fresh in-memory store.
pub fn make_server(config: &Config) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = make_server_with(store.clone(), config);
    (server, store)
}

pub async fn seed(store: &MemoryStore, slug: &str, url: &str) {
    store.insert_if_absent(slug, url).await.unwrap();
}
