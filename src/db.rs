use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

/// Opens the process-wide pool. Fails if the first connection cannot be made.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    tracing::info!(max_connections = config.max_connections, "connecting to database");
    let db = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    Ok(db)
}
