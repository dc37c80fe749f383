//! Database layer - connection pool, schema and the event repository
//!
//! # Design Principles
//!
//! - One shared connection pool, created at startup - no Arc<Mutex<Connection>>
//! - One statement per operation, no multi-step transactions
//! - Every value is a bind parameter, including dynamic UPDATE lists
//! - Absence is a value (`Option`/`bool`), not an error

pub mod events;
pub mod pool;
pub mod schema;

#[cfg(test)]
pub(crate) mod memory;

pub use events::{DbError, EventRepo, EventStore};
pub use pool::{create_pool, create_pool_with_options, PoolSettings};
pub use sqlx::PgPool;
