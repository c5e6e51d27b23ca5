//! formfill CLI - form submission server
//!
//! This is the main entry point for the formfill command-line tool, which provides:
//! - The HTTP server for the form page, submissions and exports (`serve`)
//! - One-off table creation (`migrate`)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "formfill",
    author,
    version,
    about = "Collect contact form submissions into PostgreSQL and export them as text",
    long_about = "Serve a contact form, store every submission as a row in the form_data table, \
                  and hand a submitted form back as a plain-text download."
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (form page, /submit, /download)
    Serve(commands::serve::ServeArgs),
    /// Create the form_data table if it does not exist
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed flags
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    dotenv.log();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
