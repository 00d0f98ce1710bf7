// handlers/public/auth/setup.rs - POST /api/setup-admin handler

use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};

use super::Credentials;
use crate::api::ApiJson;
use crate::error::ApiError;
use crate::AppState;

/// POST /api/setup-admin - create an administrator account
///
/// Returns 201 on success, 409 when the username is taken and 400 when either
/// field is missing or empty.
pub async fn setup_admin_post(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Result<(StatusCode, ApiJson<Value>), ApiError> {
    let (username, password) = credentials.require()?;
    let admin = state.admins.create_admin(&username, &password).await?;

    Ok((
        StatusCode::CREATED,
        ApiJson(json!({ "message": format!("Administrator '{}' created", admin.username) })),
    ))
}
