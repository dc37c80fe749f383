//! Schema creation for the events table

use sqlx::PgPool;

/// Idempotent DDL for the `events` table.
pub const CREATE_EVENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS events (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        date VARCHAR(255),
        description TEXT,
        engagement INT,
        status VARCHAR(100),
        source VARCHAR(50)
    )
"#;

/// Ensure the `events` table exists.
///
/// Safe to call on every startup; an existing table is left as is.
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring events table exists...");

    sqlx::query(CREATE_EVENTS_TABLE).execute(pool).await?;

    tracing::info!("Events table ready");
    Ok(())
}
