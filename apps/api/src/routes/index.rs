use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../../static/index.html");

/// GET /
/// Static landing page with forms for the three POST routes.
pub async fn index_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
