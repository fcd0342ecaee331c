//! Key-value store backends.
//!
//! Provides three [`KeyValueStore`] implementations:
//! - [`MemoryStore`] - Process-local map, the development default
//! - [`PgStore`] - PostgreSQL table partitioned by the slug's first character
//! - [`RedisStore`] - Redis keys written with `SET NX`
//!
//! The backend is picked from the scheme of `STORAGE_URL` by [`connect`].

mod memory_store;
mod pg_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use pg_store::PgStore;
pub use redis_store::RedisStore;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::Config;
use crate::domain::repositories::KeyValueStore;

/// Storage backends selectable through `STORAGE_URL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Postgres,
    Redis,
}

impl StorageKind {
    /// Picks the backend from the URL scheme.
    ///
    /// # Errors
    ///
    /// Returns an error for any scheme other than `memory`, `postgres`,
    /// `postgresql`, `redis` or `rediss`.
    pub fn from_url(url: &str) -> Result<Self> {
        let scheme = url
            .split_once("://")
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .with_context(|| format!("STORAGE_URL must look like 'scheme://...', got '{url}'"))?;

        match scheme.as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "redis" | "rediss" => Ok(Self::Redis),
            other => anyhow::bail!(
                "STORAGE_URL scheme must be 'memory', 'postgres' or 'redis', got '{other}'"
            ),
        }
    }
}

/// Connects to the backend configured in `config`.
///
/// PostgreSQL tables are created on first use if they do not exist.
///
/// # Errors
///
/// Returns an error if the URL is unsupported, the connection fails, or the
/// PostgreSQL table cannot be created.
pub async fn connect(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match StorageKind::from_url(&config.storage_url)? {
        StorageKind::Memory => {
            info!("Storage: in-memory (mappings are lost on restart)");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageKind::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(&config.storage_url)
                .await
                .context("Failed to connect to PostgreSQL")?;

            let store = PgStore::new(pool, &config.table_name);
            store
                .ensure_schema()
                .await
                .context("Failed to create mappings table")?;

            info!("Storage: PostgreSQL (table {})", config.table_name);
            Ok(Arc::new(store))
        }
        StorageKind::Redis => {
            let store = RedisStore::connect(&config.storage_url, &config.table_name)
                .await
                .context("Failed to connect to Redis")?;

            info!("Storage: Redis (namespace {})", config.table_name);
            Ok(Arc::new(store))
        }
    }
}
