//! Submission store trait and implementations
//!
//! Provides a seam between handlers and persistence, with:
//! - Postgres implementation backed by the connection pool
//! - In-memory implementation for router tests

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{DbError, StoredSubmission, SubmissionRepo};
use crate::models::ValidSubmission;

/// Persistence for validated submissions (testable)
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert one submission, returning the stored record.
    async fn insert(&self, submission: &ValidSubmission) -> Result<StoredSubmission, DbError>;
}

/// Postgres-backed store; each call checks a connection out of the pool.
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, submission: &ValidSubmission) -> Result<StoredSubmission, DbError> {
        SubmissionRepo::new(&self.pool).insert(submission).await
    }
}

#[cfg(test)]
pub use memory::MemorySubmissionStore;
