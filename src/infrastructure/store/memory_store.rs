//! In-memory store for development and tests.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] backed by a process-local map.
///
/// Inserts take the write lock for the whole check-and-insert, which makes
/// [`KeyValueStore::insert_if_absent`] atomic per key. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (mappings are not persisted)");
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<String, StoreError> {
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert_if_absent(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self.entries.write().await.entry(key.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryStore::new();

        store
            .insert_if_absent("abc123", "https://example.com")
            .await
            .unwrap();

        assert_eq!(store.get("abc123").await.unwrap(), "https://example.com");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = MemoryStore::new();

        assert!(matches!(store.get("nope").await, Err(StoreError::NotFound)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_insert_does_not_overwrite() {
        let store = MemoryStore::new();

        store
            .insert_if_absent("abc123", "https://first.com")
            .await
            .unwrap();

        let err = store
            .insert_if_absent("abc123", "https://second.com")
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::AlreadyExists));
        assert_eq!(store.get("abc123").await.unwrap(), "https://first.com");
    }

    #[tokio::test]
    async fn test_keys_are_case_sensitive() {
        let store = MemoryStore::new();

        store.insert_if_absent("Abc", "upper").await.unwrap();
        store.insert_if_absent("abc", "lower").await.unwrap();

        assert_eq!(store.get("Abc").await.unwrap(), "upper");
        assert_eq!(store.get("abc").await.unwrap(), "lower");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_single_winner() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert_if_absent("race", &format!("https://example.com/{i}"))
                        .await
                })
            })
            .collect();

        let mut winners = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => winners += 1,
                Err(StoreError::AlreadyExists) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(conflicts, 31);
        assert_eq!(store.len().await, 1);
    }
}
