//! Export endpoint - returns the posted form as a text attachment

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
    Router,
};

use crate::export::EXPORT_FILENAME;
use crate::http::error::ApiError;
use crate::http::extractors::ValidForm;
use crate::http::server::AppState;

/// POST /download - render the posted form and send it back as a file
async fn download(
    State(state): State<Arc<AppState>>,
    ValidForm(submission): ValidForm,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.exporter.export(&submission).await?;
    tracing::debug!(len = bytes.len(), "Export ready");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        bytes,
    ))
}

/// Export routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/download", post(download))
}
