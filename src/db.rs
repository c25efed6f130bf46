use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::utils::error::CoreError;

const ACQUIRE_TIMEOUT_SECS: u64 = 3;

/// Owner of the SQLite pool. Created once during startup and handed to the
/// stores that need it.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, CoreError> {
        // A write is reported as done only once it has been synced to disk.
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
            .connect_with(options)
            .await?;

        info!(url = %config.url, "Connected to ticket database");

        Ok(Self { pool })
    }

    /// Private in-memory database. Limited to one connection that is never
    /// recycled, since every SQLite connection would otherwise see its own
    /// empty database.
    pub async fn in_memory() -> Result<Self, CoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), CoreError> {
        info!("Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        info!("Migrations completed successfully.");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
