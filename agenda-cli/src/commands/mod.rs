//! Command implementations for the agenda CLI

pub mod init_db;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;

use agenda_server::db::pool::{DEFAULT_MAX_CONNECTIONS, DEFAULT_MIN_CONNECTIONS};
use agenda_server::db::PgPool;
use agenda_server::{create_pool_with_options, PoolSettings};

pub use init_db::run_init_db;
pub use serve::run_serve;

/// Database connection arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides environment and .env)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Minimum number of pooled connections kept open
    #[arg(long, env = "AGENDA_DB_MIN_CONNECTIONS", default_value_t = DEFAULT_MIN_CONNECTIONS)]
    pub min_connections: u32,

    /// Maximum number of simultaneous database connections
    #[arg(long, env = "AGENDA_DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            min_connections: self.min_connections,
            max_connections: self.max_connections,
        }
    }

    /// Open the connection pool described by these arguments.
    pub async fn connect(&self) -> Result<PgPool> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ./.env")?;

        create_pool_with_options(database_url, self.pool_settings())
            .await
            .context("Failed to create database pool")
    }
}
