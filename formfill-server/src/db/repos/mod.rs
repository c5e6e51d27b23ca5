//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues one statement per call.

pub mod submissions;

pub use submissions::{DbError, StoredSubmission, SubmissionRepo};
