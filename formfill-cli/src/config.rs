//! Environment loading and shared database arguments

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use formfill_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use formfill_server::db::RetryPolicy;
use formfill_server::DatabaseConfig;
use tracing::{debug, warn};

/// Load `.env` from the current directory, if present.
///
/// dotenvy never overwrites variables that are already set, so the real
/// environment always wins. Runs before tracing is up, so the outcome is
/// returned for the caller to log.
pub fn load_dotenv() -> DotenvOutcome {
    match dotenvy::dotenv() {
        Ok(path) => DotenvOutcome::Loaded(path),
        Err(e) if e.not_found() => DotenvOutcome::Missing,
        Err(e) => DotenvOutcome::Failed(e.to_string()),
    }
}

/// Result of looking for a `.env` file
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    Missing,
    Failed(String),
}

impl DotenvOutcome {
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => debug!("Loaded .env from {}", path.display()),
            Self::Missing => debug!("No .env file in current directory"),
            Self::Failed(e) => warn!("Failed to load .env: {}", e),
        }
    }
}

/// Database connection arguments shared by `serve` and `migrate`
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides DB_HOST/DB_PORT/DB_USER/DB_PASSWORD/DB_NAME)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Connection attempts before giving up at startup
    #[arg(long, default_value_t = 5)]
    pub connect_attempts: u32,

    /// Seconds to wait between connection attempts
    #[arg(long, default_value_t = 2)]
    pub connect_retry_secs: u64,
}

impl DatabaseArgs {
    /// Resolve the database location from flags, then the environment.
    pub fn resolve(&self) -> Result<DatabaseConfig> {
        match &self.database_url {
            Some(url) if !url.is_empty() => Ok(DatabaseConfig::with_url(url.clone())),
            _ => DatabaseConfig::from_env().context("Invalid database configuration"),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.connect_attempts,
            delay: Duration::from_secs(self.connect_retry_secs),
        }
    }
}
