//! PostgreSQL store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::entities::url_mapping::partition_key;
use crate::domain::repositories::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] backed by a PostgreSQL table.
///
/// Rows are keyed by `(partition_key, row_key)`, where the partition is the
/// slug's first character and the row key is the whole slug. Inserts use
/// `ON CONFLICT DO NOTHING`, so the primary key makes them atomic per slug.
///
/// The table name comes from configuration and is spliced into the SQL; it must
/// be a plain identifier (enforced by [`crate::config::Config::validate`]).
pub struct PgStore {
    pool: PgPool,
    table: String,
    select_sql: String,
    insert_sql: String,
}

impl PgStore {
    /// Creates a store over `table` using an existing pool.
    pub fn new(pool: PgPool, table: &str) -> Self {
        let quoted = format!("\"{table}\"");

        Self {
            pool,
            select_sql: format!(
                "SELECT url FROM {quoted} WHERE partition_key = $1 AND row_key = $2"
            ),
            insert_sql: format!(
                "INSERT INTO {quoted} (partition_key, row_key, url) VALUES ($1, $2, $3) \
                 ON CONFLICT (partition_key, row_key) DO NOTHING"
            ),
            table: quoted,
        }
    }

    /// Creates the mappings table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                partition_key TEXT NOT NULL,
                row_key TEXT NOT NULL,
                url TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                PRIMARY KEY (partition_key, row_key)
            )
            "#,
            self.table
        );

        sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        debug!("Ensured table {}", self.table);
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for PgStore {
    async fn get(&self, key: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>(&self.select_sql)
            .bind(partition_key(key))
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)?
            .ok_or(StoreError::NotFound)
    }

    async fn insert_if_absent(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let result = sqlx::query(&self.insert_sql)
            .bind(partition_key(key))
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::AlreadyExists);
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
