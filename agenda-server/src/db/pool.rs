//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection bounds. The pool is created
//! once at startup and shared by every request.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default minimum number of idle connections kept open.
pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Pool size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            min_connections: DEFAULT_MIN_CONNECTIONS,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl PoolSettings {
    /// Reject bounds the pool could never satisfy.
    pub fn validate(&self) -> Result<(), sqlx::Error> {
        if self.max_connections == 0 {
            return Err(sqlx::Error::Configuration(
                "max_connections must be at least 1".into(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(sqlx::Error::Configuration(
                format!(
                    "min_connections ({}) exceeds max_connections ({})",
                    self.min_connections, self.max_connections
                )
                .into(),
            ));
        }
        Ok(())
    }
}

/// Create a PostgreSQL connection pool with the default bounds.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/agenda").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, PoolSettings::default()).await
}

/// Create a PostgreSQL connection pool with custom bounds.
///
/// # Errors
///
/// Returns `sqlx::Error::Configuration` for invalid bounds, or the
/// connection error if the first connection cannot be established.
pub async fn create_pool_with_options(
    database_url: &str,
    settings: PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    settings.validate()?;

    tracing::debug!(
        min = settings.min_connections,
        max = settings.max_connections,
        "connecting database pool"
    );

    PgPoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .connect(database_url)
        .await
}
