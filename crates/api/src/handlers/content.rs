//! Handlers for the content view models.
//!
//! Every handler answers 200 with whatever the gateway returns; when the
//! CMS is down that is fallback content, not an error.

use axum::extract::{Path, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::schema::validate_slug;
use folio_core::view_model::{AboutView, HomePage, ProjectView, SiteConfigView};
use folio_gateway::page::load_home_page;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/home
pub async fn home(State(state): State<AppState>) -> Json<DataResponse<HomePage>> {
    let data = load_home_page(&state.gateway).await;
    Json(DataResponse { data })
}

/// GET /api/v1/projects
///
/// Published projects in display order.
pub async fn list_projects(State(state): State<AppState>) -> Json<DataResponse<Vec<ProjectView>>> {
    let data = state.gateway.published_projects().await;
    Json(DataResponse { data })
}

/// GET /api/v1/projects/{slug}
///
/// A malformed slug is rejected before the CMS is queried. Drafts and
/// unknown slugs are both 404.
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    validate_slug(&slug)?;

    let project = state.gateway.project_by_slug(&slug).await.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            key: slug,
        })
    })?;

    Ok(Json(DataResponse { data: project }))
}

/// GET /api/v1/site-config
pub async fn site_config(State(state): State<AppState>) -> Json<DataResponse<SiteConfigView>> {
    let data = state.gateway.site_config().await;
    Json(DataResponse { data })
}

/// GET /api/v1/about
pub async fn about(State(state): State<AppState>) -> Json<DataResponse<AboutView>> {
    let data = state.gateway.about_section().await;
    Json(DataResponse { data })
}
