// handlers/public/content.rs - Public reads of portfolio content
//
// GET /api/blog, GET /api/projects, GET /api/about, GET /api/contact

use axum::extract::State;
use serde_json::{json, Value};

use crate::api::ApiJson;
use crate::database::models::{About, BlogPost, Contact, Project};
use crate::error::ApiError;
use crate::AppState;

pub async fn blog_list(State(state): State<AppState>) -> Result<ApiJson<Vec<BlogPost>>, ApiError> {
    Ok(ApiJson(BlogPost::list(state.db.pool()).await?))
}

pub async fn projects_list(State(state): State<AppState>) -> Result<ApiJson<Vec<Project>>, ApiError> {
    Ok(ApiJson(Project::list(state.db.pool()).await?))
}

/// The about record, or `{}` before one has been written
pub async fn about_get(State(state): State<AppState>) -> Result<ApiJson<Value>, ApiError> {
    let about = About::get(state.db.pool()).await?;
    Ok(ApiJson(singleton_json(about)))
}

/// The contact record, or `{}` before one has been written
pub async fn contact_get(State(state): State<AppState>) -> Result<ApiJson<Value>, ApiError> {
    let contact = Contact::get(state.db.pool()).await?;
    Ok(ApiJson(singleton_json(contact)))
}

fn singleton_json<T: serde::Serialize>(record: Option<T>) -> Value {
    record
        .and_then(|r| serde_json::to_value(r).ok())
        .unwrap_or_else(|| json!({}))
}
