// handlers/protected/blog.rs - Blog post writes

use axum::{
    extract::State,
    http::StatusCode,
    Extension,
};
use serde_json::{json, Value};

use super::missing_fields;
use crate::api::{ApiJson, ApiPath};
use crate::database::models::{BlogPost, BlogPostInput, BlogPostPatch};
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::AppState;

/// POST /api/blog - create a post from `{title, content}`
pub async fn blog_post(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiJson(mut input): ApiJson<BlogPostInput>,
) -> Result<(StatusCode, ApiJson<BlogPost>), ApiError> {
    input.validate().map_err(missing_fields)?;
    // Ids are assigned by the store here; only import restores them
    input.id = None;

    let post = BlogPost::create(state.db.pool(), &input).await?;
    tracing::info!(id = post.id, admin = %admin.username, "Blog post created");

    Ok((StatusCode::CREATED, ApiJson(post)))
}

/// PUT /api/blog/:id - update the given fields, keep the rest
pub async fn blog_put(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(patch): ApiJson<BlogPostPatch>,
) -> Result<ApiJson<BlogPost>, ApiError> {
    let post = BlogPost::update(state.db.pool(), id, &patch).await?;
    tracing::info!(id, admin = %admin.username, "Blog post updated");

    Ok(ApiJson(post))
}

/// DELETE /api/blog/:id
pub async fn blog_delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiPath(id): ApiPath<i64>,
) -> Result<ApiJson<Value>, ApiError> {
    BlogPost::delete(state.db.pool(), id).await?;
    tracing::info!(id, admin = %admin.username, "Blog post deleted");

    Ok(ApiJson(json!({ "message": "Post deleted" })))
}
