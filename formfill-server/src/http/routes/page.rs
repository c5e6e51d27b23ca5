//! Form page
//!
//! The page is compiled into the binary so `GET /` never depends on the
//! working directory.

use axum::{response::Html, routing::get, Router};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Page routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_serves_form() {
        let Html(page) = index().await;
        assert!(page.contains("<form"));
        assert!(page.contains("/submit"));
        assert!(page.contains("/download"));
    }
}
