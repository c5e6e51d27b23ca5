//! Command implementations for formfill CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use formfill_server::db::{connect_with_retry, migrations, PgPool};

use crate::config::DatabaseArgs;

/// Connect (with retry) and make sure the table exists.
async fn connect_and_migrate(args: &DatabaseArgs) -> Result<PgPool> {
    let database = args.resolve()?;
    tracing::info!(database = %database, "Connecting to database");

    let options = database
        .connect_options()
        .context("Invalid database configuration")?;
    let pool = connect_with_retry(options, args.max_connections, args.retry_policy())
        .await
        .context("Failed to connect to database")?;

    if let Err(e) = migrations::run(&pool).await {
        pool.close().await;
        return Err(e).context("Failed to run migrations");
    }

    Ok(pool)
}
