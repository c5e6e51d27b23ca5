//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no shared connection
//! - Connect with bounded retries at startup, close the pool on shutdown
//! - Handlers talk to `SubmissionStore`, never to the pool directly

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use pool::{connect_with_retry, create_pool, create_pool_with_options, RetryPolicy};
pub use repos::*;
pub use store::{PgSubmissionStore, SubmissionStore};
#[cfg(test)]
pub use store::MemorySubmissionStore;

pub use sqlx::PgPool;
