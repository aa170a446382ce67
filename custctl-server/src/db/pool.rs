//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Handlers never open
//! their own connections; each repository call borrows one from the pool
//! for a single statement.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection before failing the request.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool settings, built once at startup and passed in explicitly.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// PostgreSQL connection string
    pub database_url: String,

    /// Upper bound on open connections
    pub max_connections: u32,

    /// How long a request may wait for a connection
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .test_before_acquire(true)
    }
}

/// Create a PostgreSQL connection pool with default limits.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/customers").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_config(&PoolConfig::new(database_url)).await
}

/// Create a PostgreSQL connection pool from explicit settings.
///
/// Connects eagerly so an unreachable database surfaces at startup.
pub async fn create_pool_with_config(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        acquire_timeout_ms = config.acquire_timeout.as_millis() as u64,
        "connecting database pool"
    );
    config.options().connect(&config.database_url).await
}

/// Build a pool that does not connect until first use.
///
/// The URL is still parsed up front, so a malformed connection string fails
/// here rather than on the first request.
pub fn create_lazy_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    config.options().connect_lazy(&config.database_url)
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
