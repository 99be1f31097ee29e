use axum::routing::any;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the admin placeholder for every method and sub-path.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", any(handlers::admin::not_configured))
        .route("/admin/{*path}", any(handlers::admin::not_configured))
}
