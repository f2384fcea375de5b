//! Static demo page

use axum::response::Html;

/// Fixed page; served byte-for-byte regardless of configuration
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
