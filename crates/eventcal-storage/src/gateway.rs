// Storage gateway: pooled PostgreSQL connections plus a single
// parameterized execute operation.
//
// Statements are `&'static str` so only compile-time text reaches the store;
// every caller-supplied value travels as a bound parameter.

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{FromRow, PgPool};

use crate::config::DatabaseConfig;
use crate::error::{Result, StorageError};

/// A positional statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    BigInt(Option<i64>),
    Text(Option<String>),
    Timestamp(Option<DateTime<Utc>>),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::BigInt(Some(value))
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(value: Option<i64>) -> Self {
        SqlValue::BigInt(value)
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::Text(value)
    }
}

impl From<Option<DateTime<Utc>>> for SqlValue {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        SqlValue::Timestamp(value)
    }
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the connection pool described by `config`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = config.connect_options()?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            acquire_timeout_secs = config.acquire_timeout.as_secs(),
            "Database pool opened"
        );

        Ok(Self { pool })
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        Self::connect(&DatabaseConfig::from_url(database_url)).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Execute a fixed statement with positional parameters and decode every
    /// returned row. The pooled connection is returned on both success and
    /// failure.
    pub async fn execute<R>(&self, statement: &'static str, params: Vec<SqlValue>) -> Result<Vec<R>>
    where
        R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let query = params
            .into_iter()
            .fold(sqlx::query_as::<_, R>(statement), |query, param| match param {
                SqlValue::BigInt(value) => query.bind(value),
                SqlValue::Text(value) => query.bind(value),
                SqlValue::Timestamp(value) => query.bind(value),
            });

        query.fetch_all(&self.pool).await.map_err(|e| {
            let err = StorageError::from(e);
            tracing::warn!(error = %err, "Statement failed");
            err
        })
    }

    /// Apply the bundled schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::rejected(e.to_string()))?;
        tracing::info!("Migrations applied");
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to come back
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sql_value_conversions() {
        assert_eq!(SqlValue::from(7), SqlValue::BigInt(Some(7)));
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::BigInt(None));
        assert_eq!(
            SqlValue::from(Some("blue".to_string())),
            SqlValue::Text(Some("blue".to_string()))
        );
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(SqlValue::from(Some(ts)), SqlValue::Timestamp(Some(ts)));
    }
}
