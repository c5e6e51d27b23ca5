//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Startup connects with
//! a bounded number of attempts so the server can come up alongside the
//! database in compose-style deployments.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low for a single demonstration instance.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a handler waits for a free connection
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection retry policy used at startup
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub attempts: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no waiting
    pub fn none() -> Self {
        Self {
            attempts: 1,
            delay: Duration::ZERO,
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(options, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
}

/// Create a pool, retrying failed connects according to `policy`.
///
/// Returns the last connection error once attempts are exhausted.
pub async fn connect_with_retry(
    options: PgConnectOptions,
    max_connections: u32,
    policy: RetryPolicy,
) -> Result<PgPool, sqlx::Error> {
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match create_pool_with_options(options.clone(), max_connections).await {
            Ok(pool) => {
                tracing::info!(attempt, max_connections, "Database pool ready");
                return Ok(pool);
            }
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    attempts,
                    error = %e,
                    "Database connect failed, retrying in {:?}",
                    policy.delay
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(attempts, error = %e, "Database connect failed, giving up");
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p formfill-server -- --ignored

    fn options_from_env() -> PgConnectOptions {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        url.parse().expect("invalid DATABASE_URL")
    }

    #[test]
    fn default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts, 5);
        assert_eq!(policy.delay, Duration::from_secs(2));
        assert_eq!(RetryPolicy::none().attempts, 1);
    }

    #[tokio::test]
    async fn unreachable_database_gives_up() {
        // Port 1 on localhost refuses connections immediately
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("nobody")
            .database("nothing");
        let policy = RetryPolicy {
            attempts: 2,
            delay: Duration::from_millis(10),
        };

        let result = connect_with_retry(options, 1, policy).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(options_from_env()).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let pool = create_pool(options_from_env()).await.expect("pool creation failed");

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
