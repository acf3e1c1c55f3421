//! Static chat page.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// `GET /` — the single-page chat UI.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
