//! Key-value store trait and its error classification.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`KeyValueStore`].
///
/// Adapters classify every backend failure into one of these variants so the
/// services never see driver-specific errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key is not bound.
    #[error("key not found")]
    NotFound,

    /// An insert hit a key that is already bound.
    #[error("key already exists")]
    AlreadyExists,

    /// Any other failure (connection, timeout, protocol, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Wraps a backend failure.
    pub fn backend(e: impl std::fmt::Display) -> Self {
        Self::Backend(e.to_string())
    }
}

/// Flat key-value namespace holding slug to URL mappings.
///
/// # Atomicity
///
/// [`KeyValueStore::insert_if_absent`] must be atomic per key: when several
/// callers race on the same key exactly one succeeds and all others observe
/// [`StoreError::AlreadyExists`].
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryStore`] - process-local map
/// - [`crate::infrastructure::store::PgStore`] - PostgreSQL table
/// - [`crate::infrastructure::store::RedisStore`] - Redis `SET NX`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is unbound and
    /// [`StoreError::Backend`] on any other failure.
    async fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Binds `key` to `value` unless the key is already bound.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the key is bound (the stored value
    /// is left untouched) and [`StoreError::Backend`] on any other failure.
    async fn insert_if_absent(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
