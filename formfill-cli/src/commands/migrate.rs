//! Create the submissions table and exit

use anyhow::Result;
use clap::Parser;

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run migrations against the configured database
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = super::connect_and_migrate(&args.db).await?;
    pool.close().await;

    println!("✅ form_data table is ready");
    Ok(())
}
