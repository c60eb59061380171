//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Handle                                    │
//! │                                                                         │
//! │  Process Startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::from_env() ← HAVEN_DB_PATH or ./stationery_haven.db         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Create pool + ensure schema             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.seed_demo_data().await ← Only fills an empty store                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Dashboard pages borrow &Database for every interaction                │
//! │  db.products() / db.staff() / db.customers()                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One handle lives for the whole process. There is a single interactive
//! user, so calls arrive one at a time and SQLite's own locking is enough.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::customer::CustomerRepository;
use crate::repository::product::ProductRepository;
use crate::repository::staff::StaffRepository;
use crate::seed::{self, Catalog, SeedReport};

/// Environment variable that overrides the store location.
pub const DB_PATH_ENV: &str = "HAVEN_DB_PATH";

/// Store file used when no override is set.
pub const DEFAULT_DB_PATH: &str = "stationery_haven.db";

const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/stationery_haven.db")
///     .max_connections(2)
///     .run_migrations(true);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one interactive user)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to ensure the schema on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// The file is created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 2,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Reads the store location from `HAVEN_DB_PATH`, falling back to
    /// `./stationery_haven.db`.
    pub fn from_env() -> Self {
        Self::with_path_override(std::env::var(DB_PATH_ENV).ok())
    }

    fn with_path_override(path: Option<String>) -> Self {
        match path.filter(|p| !p.trim().is_empty()) {
            Some(path) => DbConfig::new(path),
            None => DbConfig::new(DEFAULT_DB_PATH),
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets whether to ensure the schema on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Every call yields a fresh, isolated database.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// Constructed once and passed by reference to whatever drives the pages.
/// Cloning is cheap (the pool is reference counted).
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::from_env()).await?;
/// db.seed_demo_data().await?;
///
/// let products = db.products().list_all().await?;
/// let value = haven_core::analytics::store_value(&products);
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Opens the store.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite: WAL journal, NORMAL synchronous
    /// 3. Creates the connection pool
    /// 4. Ensures the schema (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError)` - Connection or migration failed
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_options = if config.database_path == Path::new(IN_MEMORY_PATH) {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            // Taken as a plain file name, so `?` and `#` are not URL syntax
            SqliteConnectOptions::new().filename(&config.database_path)
        };

        let connect_options = connect_options
            // Readers don't block the writer
            .journal_mode(SqliteJournalMode::Wal)
            // May lose the last transaction on power loss, never corrupts
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.run_migrations {
            db.ensure_schema().await?;
        }

        Ok(db)
    }

    /// Creates each table if missing. No-op when they already exist.
    ///
    /// Called by `new()` unless `run_migrations` is off.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        info!("Ensuring database schema");
        migrations::run_migrations(&self.pool).await?;
        Ok(())
    }

    /// Returns a reference to the connection pool.
    ///
    /// Prefer repository methods when available.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Returns the staff repository.
    pub fn staff(&self) -> StaffRepository {
        StaffRepository::new(self.pool.clone())
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.pool.clone())
    }

    /// Fills an empty store with the demo products, staff and customers.
    ///
    /// The products table is the sentinel: once it holds any row this does
    /// nothing, so repeated calls never duplicate data.
    pub async fn seed_demo_data(&self) -> DbResult<SeedReport> {
        seed::seed_if_empty(&self.pool, Catalog::Demo).await
    }

    /// Same as [`Database::seed_demo_data`] but with the 27-item stationery
    /// catalog for products.
    pub async fn seed_stationery_catalog(&self) -> DbResult<SeedReport> {
        seed::seed_if_empty(&self.pool, Catalog::Stationery).await
    }

    /// Closes the database connection pool.
    ///
    /// Optional before exit. After calling close, all repository operations fail.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
