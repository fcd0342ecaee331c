//! Redis store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::url_mapping::partition_key;
use crate::domain::repositories::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] backed by Redis.
///
/// Keys are `<namespace>:<partition>:<slug>` and never expire. Inserts use
/// `SET ... NX`, which Redis executes atomically.
pub struct RedisStore {
    conn: ConnectionManager,
    namespace: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, namespace: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Backend(format!("Failed to create Redis client: {e}"))
        })?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = conn.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Backend(format!("Redis PING failed: {e}")))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            conn,
            namespace: namespace.to_string(),
        })
    }

    /// Constructs the full Redis key for a slug.
    fn build_key(&self, slug: &str) -> String {
        format!("{}:{}:{}", self.namespace, partition_key(slug), slug)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let redis_key = self.build_key(key);
        let mut conn = self.conn.clone();

        conn.get::<_, Option<String>>(&redis_key)
            .await
            .map_err(StoreError::backend)?
            .ok_or(StoreError::NotFound)
    }

    async fn insert_if_absent(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let redis_key = self.build_key(key);
        let mut conn = self.conn.clone();

        // SET NX replies OK when written and nil when the key exists
        let reply: Option<String> = redis::cmd("SET")
            .arg(&redis_key)
            .arg(value)
            .arg("NX")
            .query_async(&mut conn)
            .await
            .map_err(StoreError::backend)?;

        match reply {
            Some(_) => {
                debug!("Redis SET NX: {}", redis_key);
                Ok(())
            }
            None => Err(StoreError::AlreadyExists),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
