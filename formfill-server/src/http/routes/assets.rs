//! Static file serving for /static/
//!
//! Only mounted when a static directory is configured.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

/// Create router for static file serving from `dir`
pub fn router<S>(dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    tracing::info!(path = %dir.display(), "Serving static files from /static/");

    Router::new().nest_service("/static", ServeDir::new(dir))
}
