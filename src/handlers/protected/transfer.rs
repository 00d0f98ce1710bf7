// handlers/protected/transfer.rs - Whole-portfolio export and import

use axum::{extract::State, Extension};
use serde_json::{json, Value};

use crate::api::ApiJson;
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::services::PortfolioDocument;
use crate::AppState;

/// GET /api/export - `{about, contact, projects, blog}`
pub async fn export_get(State(state): State<AppState>) -> Result<ApiJson<PortfolioDocument>, ApiError> {
    Ok(ApiJson(state.transfer.export().await?))
}

/// POST /api/import - replace all content with the given document
///
/// Runs in one transaction: on any error the previous content is untouched.
pub async fn import_post(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiJson(document): ApiJson<PortfolioDocument>,
) -> Result<ApiJson<Value>, ApiError> {
    let summary = state.transfer.import(&document).await?;
    tracing::info!(admin = %admin.username, "Portfolio imported");

    Ok(ApiJson(json!({
        "message": "Import completed",
        "blog": summary.blog,
        "projects": summary.projects,
    })))
}
