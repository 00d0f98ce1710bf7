// handlers/protected/projects.rs - Project writes

use axum::{
    extract::State,
    http::StatusCode,
    Extension,
};
use serde_json::{json, Value};

use super::missing_fields;
use crate::api::{ApiJson, ApiPath};
use crate::database::models::{Project, ProjectInput, ProjectPatch};
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::AppState;

/// POST /api/projects - create a project; `link` is optional
pub async fn project_post(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiJson(mut input): ApiJson<ProjectInput>,
) -> Result<(StatusCode, ApiJson<Project>), ApiError> {
    input.validate().map_err(missing_fields)?;
    input.id = None;

    let project = Project::create(state.db.pool(), &input).await?;
    tracing::info!(id = project.id, admin = %admin.username, "Project created");

    Ok((StatusCode::CREATED, ApiJson(project)))
}

/// PUT /api/projects/:id - update the given fields, keep the rest
pub async fn project_put(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(patch): ApiJson<ProjectPatch>,
) -> Result<ApiJson<Project>, ApiError> {
    let project = Project::update(state.db.pool(), id, &patch).await?;
    tracing::info!(id, admin = %admin.username, "Project updated");

    Ok(ApiJson(project))
}

/// DELETE /api/projects/:id
pub async fn project_delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiPath(id): ApiPath<i64>,
) -> Result<ApiJson<Value>, ApiError> {
    Project::delete(state.db.pool(), id).await?;
    tracing::info!(id, admin = %admin.username, "Project deleted");

    Ok(ApiJson(json!({ "message": "Project deleted" })))
}
