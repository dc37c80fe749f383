//! agenda-server: HTTP CRUD service for agenda events
//!
//! A single `events` table in PostgreSQL exposed over HTTP:
//! - `models`: the event record and validated input
//! - `db`: connection pool, schema creation and the event repository
//! - `http`: axum routes, error mapping and server bootstrap

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError, EventRepo, EventStore, PoolSettings};
pub use http::{run_server, ServerConfig, ServerError};
pub use models::{Event, EventChanges, NewEvent, ValidationError};
