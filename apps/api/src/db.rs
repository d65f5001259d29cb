use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// Creates the SQLite pool backing durable local storage, creating the
/// database file if it does not exist yet.
pub async fn create_pool(storage_url: &str) -> Result<SqlitePool> {
    info!("Opening local storage at {storage_url}");

    let options = SqliteConnectOptions::from_str(storage_url)
        .with_context(|| format!("Invalid STORAGE_URL '{storage_url}'"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await?;

    info!("Local storage pool established");
    Ok(pool)
}
