//! Redis store tests.
//!
//! Require a running server:
//!
//! ```bash
//! TEST_REDIS_URL=redis://localhost:6379/15 cargo test --test store_redis -- --ignored
//! ```

use minimelon::domain::repositories::{KeyValueStore, StoreError};
use minimelon::infrastructure::store::RedisStore;
use rand::Rng;

/// Each test gets its own namespace so runs never see each other's keys.
async fn make_store() -> RedisStore {
    let url = std::env::var("TEST_REDIS_URL").expect("TEST_REDIS_URL must be set");
    let namespace = format!("minimelon_test_{}", rand::rng().random::<u64>());

    RedisStore::connect(&url, &namespace).await.unwrap()
}

#[tokio::test]
#[ignore]
async fn test_insert_and_get() {
    let store = make_store().await;

    store
        .insert_if_absent("melon", "https://example.com")
        .await
        .unwrap();

    assert_eq!(store.get("melon").await.unwrap(), "https://example.com");
}

#[tokio::test]
#[ignore]
async fn test_get_missing() {
    let store = make_store().await;

    assert!(matches!(store.get("nope").await, Err(StoreError::NotFound)));
}

#[tokio::test]
#[ignore]
async fn test_insert_existing_keeps_first_value() {
    let store = make_store().await;

    store.insert_if_absent("dup", "https://first.example").await.unwrap();
    let second = store.insert_if_absent("dup", "https://second.example").await;

    assert!(matches!(second, Err(StoreError::AlreadyExists)));
    assert_eq!(store.get("dup").await.unwrap(), "https://first.example");
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let store = make_store().await;

    assert!(store.health_check().await);
}
