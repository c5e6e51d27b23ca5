//! Submission repository
//!
//! One INSERT per submission. No duplicate detection: identical payloads
//! produce independent rows.

use sqlx::{FromRow, PgPool};

use crate::models::ValidSubmission;

/// Submission record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoredSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub country_code: String,
    pub phone: String,
}

impl StoredSubmission {
    /// Build a record from validated fields and an assigned id.
    pub fn from_valid(id: i64, submission: &ValidSubmission) -> Self {
        Self {
            id,
            name: submission.name.as_str().to_owned(),
            email: submission.email.as_str().to_owned(),
            country_code: submission.country_code.as_str().to_owned(),
            phone: submission.phone.as_str().to_owned(),
        }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Submission repository
pub struct SubmissionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SubmissionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one row and return it with its assigned id.
    pub async fn insert(&self, submission: &ValidSubmission) -> Result<StoredSubmission, DbError> {
        let row: StoredSubmission = sqlx::query_as(
            r#"
            INSERT INTO form_data (name, email, country_code, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, country_code, phone
            "#,
        )
        .bind(submission.name.as_str())
        .bind(submission.email.as_str())
        .bind(submission.country_code.as_str())
        .bind(submission.phone.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }
}
