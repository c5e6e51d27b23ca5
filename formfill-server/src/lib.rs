//! formfill-server: form submission storage and export over HTTP
//!
//! Accepts name/email/country code/phone submissions, stores one row per
//! submission, and renders a posted form back as a plain-text download.

pub mod config;
pub mod db;
pub mod export;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use db::{PgSubmissionStore, SubmissionStore};
pub use export::Exporter;
pub use http::{run_server, AppState, ServerConfig};
