//! Submission endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidForm;
use crate::http::server::AppState;

/// Acknowledgement returned for every stored submission
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";

/// Submit response
#[derive(Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
}

/// POST /submit - store one submission
async fn submit(
    State(state): State<Arc<AppState>>,
    ValidForm(submission): ValidForm,
) -> Result<Json<SubmitResponse>, ApiError> {
    let stored = state.store.insert(&submission).await?;
    tracing::info!(id = stored.id, "Stored form submission");

    Ok(Json(SubmitResponse {
        message: SUBMITTED_MESSAGE,
    }))
}

/// Submission routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/submit", post(submit))
}
