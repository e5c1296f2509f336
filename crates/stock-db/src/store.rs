//! # Store Handle
//!
//! Opening, configuring and closing the SQLite product store.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Lifecycle                                    │
//! │                                                                         │
//! │  CLI startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure file path, timeout, journal mode      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::initialize(config).await                                       │
//! │       ├── open file (create if missing) ─── fail → ConnectionFailed    │
//! │       └── CREATE TABLE IF NOT EXISTS ───── fail → close, SchemaFailed  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.products().create(..) / list() / update(..) / delete(..)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.close().await ← once at shutdown; later calls → NotInitialized  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Connection
//! The pool is capped at a single connection. There is one user and one
//! writer, so no locking discipline is needed on top of SQLite's own.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "stock.db";

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use stock_db::DbConfig;
///
/// let config = DbConfig::new("./data/stock.db").connect_timeout(Duration::from_secs(5));
/// assert_eq!(config.connect_timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long to wait for the connection.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// SQLite journal mode.
    /// Default: DELETE, which keeps the datastore a single file on disk
    pub journal_mode: SqliteJournalMode,
}

impl DbConfig {
    /// Creates a configuration for the given file. The file is created on
    /// open if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
            journal_mode: SqliteJournalMode::Delete,
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the journal mode.
    pub fn journal_mode(mut self, mode: SqliteJournalMode) -> Self {
        self.journal_mode = mode;
        self
    }

    /// Sync level matching the journal mode.
    ///
    /// NORMAL is only crash-safe under WAL. Rollback journals get FULL.
    pub fn synchronous(&self) -> SqliteSynchronous {
        match self.journal_mode {
            SqliteJournalMode::Wal => SqliteSynchronous::Normal,
            _ => SqliteSynchronous::Full,
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new(DEFAULT_DB_PATH)
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle to an open product store.
///
/// Passed explicitly to everything that touches persisted state; there is no
/// global connection.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::open("stock.db").await?;
/// let id = store.products().create(&NewProduct::new("Pen", 10, 1.5)).await?;
/// store.close().await;
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
    path: PathBuf,
}

impl Store {
    /// Opens the store at `path` with default settings.
    pub async fn open(path: impl Into<PathBuf>) -> DbResult<Self> {
        Store::initialize(DbConfig::new(path)).await
    }

    /// Opens (creating if absent) the database file and ensures the product
    /// table exists.
    ///
    /// ## Returns
    /// * `Ok(Store)` - Ready-to-use handle
    /// * `Err(DbError::ConnectionFailed)` - The file could not be opened
    /// * `Err(DbError::SchemaFailed)` - The table could not be created; the
    ///   connection is closed before returning
    pub async fn initialize(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing product store"
        );

        let connect_options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true)
            .journal_mode(config.journal_mode)
            .synchronous(config.synchronous());

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        if let Err(err) = schema::ensure_schema(&pool).await {
            pool.close().await;
            return Err(err);
        }

        info!("Product store ready");

        Ok(Store {
            pool,
            path: config.database_path,
        })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = store.products().list().await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Closes the store.
    ///
    /// Safe to call more than once. Afterwards every repository operation,
    /// including ones on repositories obtained earlier, fails with
    /// `DbError::NotInitialized`.
    pub async fn close(&self) {
        if self.pool.is_closed() {
            debug!("Product store already closed");
            return;
        }

        info!(path = %self.path.display(), "Closing product store");
        self.pool.close().await;
    }

    /// Whether [`Store::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        if self.pool.is_closed() {
            return false;
        }

        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Returns the connection pool for diagnostics.
    ///
    /// Prefer repository methods for anything touching products.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/stock-test.db")
            .connect_timeout(Duration::from_secs(2))
            .journal_mode(SqliteJournalMode::Wal);

        assert_eq!(config.database_path, PathBuf::from("/tmp/stock-test.db"));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(matches!(config.journal_mode, SqliteJournalMode::Wal));
    }

    #[test]
    fn test_default_path() {
        let config = DbConfig::default();
        assert_eq!(config.database_path, PathBuf::from("stock.db"));
        assert!(matches!(config.journal_mode, SqliteJournalMode::Delete));
    }

    #[test]
    fn test_synchronous_follows_journal_mode() {
        let config = DbConfig::default();
        assert!(matches!(config.synchronous(), SqliteSynchronous::Full));

        let config = config.journal_mode(SqliteJournalMode::Wal);
        assert!(matches!(config.synchronous(), SqliteSynchronous::Normal));

        let config = config.journal_mode(SqliteJournalMode::Truncate);
        assert!(matches!(config.synchronous(), SqliteSynchronous::Full));
    }

    #[tokio::test]
    async fn test_default_store_syncs_fully() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("stock.db")).await.unwrap();

        // PRAGMA synchronous: 1 = NORMAL, 2 = FULL
        let level: i64 = sqlx::query_scalar("PRAGMA synchronous")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(level, 2);

        let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(mode, "delete");

        store.close().await;
    }

    #[tokio::test]
    async fn test_initialize_creates_file_and_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.db");

        let store = Store::open(&path).await.unwrap();

        assert!(path.exists());
        assert!(store.health_check().await);
        assert!(schema::product_table_exists(store.pool()).await.unwrap());

        store.close().await;
    }

    #[tokio::test]
    async fn test_close_twice_is_safe() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("stock.db")).await.unwrap();

        store.close().await;
        store.close().await;

        assert!(store.is_closed());
        assert!(!store.health_check().await);
    }
}
