//! HTTP server command
//!
//! Connects to the database, ensures the table exists, and serves the form
//! until Ctrl+C / SIGTERM. The pool is closed after the server drains.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use formfill_server::http::{run_server, AppState, ServerConfig};
use formfill_server::{Exporter, PgSubmissionStore};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "FORMFILL_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Directory for temporary export files (default: system temp dir)
    #[arg(long, env = "FORMFILL_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Directory of static assets served under /static
    #[arg(long, env = "FORMFILL_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, env = "FORMFILL_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
            static_dir: self.static_dir.clone(),
        }
    }

    fn exporter(&self) -> Exporter {
        self.export_dir
            .clone()
            .map(Exporter::new)
            .unwrap_or_default()
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting formfill server on {}", args.bind);

    let pool = super::connect_and_migrate(&args.db).await?;

    let state = AppState::new(
        Arc::new(PgSubmissionStore::new(pool.clone())),
        args.exporter(),
    );

    // Run server (blocks until shutdown), then release connections either way
    let result = run_server(state, args.server_config()).await;
    pool.close().await;
    tracing::info!("Database pool closed");

    result.context("Server error")?;
    Ok(())
}
