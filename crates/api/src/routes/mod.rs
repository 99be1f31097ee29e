pub mod admin;
pub mod health;
pub mod seo;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /home                 landing page view model (projects, featured, site, about)
/// /projects             published projects in display order
/// /projects/{slug}      one published project
/// /site-config          site configuration global
/// /about                about section global
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(handlers::content::home))
        .route("/projects", get(handlers::content::list_projects))
        .route("/projects/{slug}", get(handlers::content::get_project))
        .route("/site-config", get(handlers::content::site_config))
        .route("/about", get(handlers::content::about))
}
