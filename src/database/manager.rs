use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the database layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Map unique-constraint violations to `Conflict`, leave everything else as is.
    pub fn from_write(err: sqlx::Error, what: impl Into<String>) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    || db_err.message().contains("UNIQUE constraint failed") =>
            {
                DatabaseError::Conflict(what.into())
            }
            _ => DatabaseError::Sqlx(err),
        }
    }
}

/// Owns the SQLite connection pool.
///
/// Created once at startup, migrated, then cloned into application state.
/// Cloning is cheap: the pool is reference counted internally.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect using `config` and run all pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let database = Self::open(config).await?;
        database.migrate().await?;
        Ok(database)
    }

    async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DatabaseError::Connection(e.to_string()))?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(5));

        // Every connection to `sqlite::memory:` opens a separate database, and
        // the data is gone once that connection closes
        let max_connections = if Self::is_in_memory(&config.url) {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
            1
        } else {
            config.max_connections.max(1)
        };

        let pool = pool_options
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;

        info!(url = %Self::redact(&config.url), max_connections, "Database connected");
        Ok(Self { pool })
    }

    /// Run embedded migrations from `./migrations`.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// Drop query parameters before logging a connection string.
    fn redact(url: &str) -> &str {
        url.split('?').next().unwrap_or(url)
    }
}
