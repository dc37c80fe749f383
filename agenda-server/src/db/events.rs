//! Event repository
//!
//! One parameterized statement per operation:
//! - create: INSERT ... RETURNING (id assigned by the store)
//! - list: full scan ordered by id
//! - update: SET list built from the supplied columns only
//! - delete: reports whether a row was removed
//!
//! Statements run in autocommit mode, so every mutation is committed by the
//! time the call returns. A missing row is `None`/`false`, never an error.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::{Event, EventChanges, FieldValue, NewEvent};

use super::schema;

/// Columns returned for every event query, in struct order.
const EVENT_COLUMNS: &str = "id, name, date, description, engagement, status, source";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// True when no pooled connection became free in time.
    pub fn is_pool_timeout(&self) -> bool {
        matches!(self, Self::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

/// Storage operations for events (testable)
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Create the backing table if it does not exist yet.
    async fn init_schema(&self) -> Result<(), DbError>;

    /// Insert a new event and return it with its assigned id.
    async fn create(&self, event: NewEvent) -> Result<Event, DbError>;

    /// All events in ascending id order.
    async fn list(&self) -> Result<Vec<Event>, DbError>;

    async fn get(&self, id: i32) -> Result<Option<Event>, DbError>;

    /// Overwrite the columns present in `changes`.
    ///
    /// Empty changes are a plain read. Returns `None` if no event has `id`.
    async fn update(&self, id: i32, changes: EventChanges) -> Result<Option<Event>, DbError>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, DbError>;
}

/// PostgreSQL-backed event repository
#[derive(Clone)]
pub struct EventRepo {
    pool: PgPool,
}

impl EventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build `UPDATE events SET c1 = $1, ... WHERE id = $n RETURNING ...`.
///
/// Column names come from `EventField`; every value is a bind parameter.
/// `changes` must not be empty.
fn update_statement(id: i32, changes: EventChanges) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE events SET ");

    let mut assignments = builder.separated(", ");
    for (field, value) in changes {
        assignments.push(field.column());
        assignments.push_unseparated(" = ");
        match value {
            FieldValue::Text(text) => assignments.push_bind_unseparated(text),
            FieldValue::Integer(n) => assignments.push_bind_unseparated(n),
        };
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(" RETURNING ");
    builder.push(EVENT_COLUMNS);
    builder
}

#[async_trait]
impl EventStore for EventRepo {
    async fn init_schema(&self) -> Result<(), DbError> {
        schema::init(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, event: NewEvent) -> Result<Event, DbError> {
        let created: Event = sqlx::query_as(
            r#"
            INSERT INTO events (name, date, description, engagement, status, source)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, date, description, engagement, status, source
            "#,
        )
        .bind(event.name().as_str())
        .bind(event.date())
        .bind(event.description())
        .bind(event.engagement())
        .bind(event.status())
        .bind(event.source())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = created.id, "event created");
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Event>, DbError> {
        let events: Vec<Event> = sqlx::query_as(
            r#"
            SELECT id, name, date, description, engagement, status, source
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn get(&self, id: i32) -> Result<Option<Event>, DbError> {
        let event: Option<Event> = sqlx::query_as(
            r#"
            SELECT id, name, date, description, engagement, status, source
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn update(&self, id: i32, changes: EventChanges) -> Result<Option<Event>, DbError> {
        if changes.is_empty() {
            return self.get(id).await;
        }

        let columns = changes.len();
        let mut builder = update_statement(id, changes);
        let updated: Option<Event> = builder
            .build_query_as()
            .fetch_optional(&self.pool)
            .await?;

        tracing::debug!(id, columns, found = updated.is_some(), "event update");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        tracing::debug!(id, deleted, "event delete");
        Ok(deleted)
    }
}
