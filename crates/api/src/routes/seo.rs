use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount crawler documents at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/robots.txt", get(handlers::seo::robots))
        .route("/sitemap.xml", get(handlers::seo::sitemap))
}
