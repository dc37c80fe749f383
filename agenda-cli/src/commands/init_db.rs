//! Schema initialization command
//!
//! Creates the events table without starting the server. Safe to re-run.

use anyhow::{Context, Result};
use clap::Parser;

use agenda_server::{EventRepo, EventStore};

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    EventRepo::new(pool.clone())
        .init_schema()
        .await
        .context("Failed to create the events table")?;

    pool.close().await;
    println!("events table ready");
    Ok(())
}
