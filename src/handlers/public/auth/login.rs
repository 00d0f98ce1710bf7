// handlers/public/auth/login.rs - POST /api/login handler

use axum::extract::State;
use chrono::Utc;
use serde::Serialize;

use super::Credentials;
use crate::api::ApiJson;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/login - exchange administrator credentials for a bearer token
///
/// A missing field is a 400. Unknown usernames and wrong passwords get the
/// same 401 so the response does not reveal which administrators exist.
pub async fn login_post(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Result<ApiJson<LoginResponse>, ApiError> {
    let (username, password) = credentials.require()?;

    if !state.admins.verify_password(&username, &password).await? {
        tracing::warn!(%username, "Failed login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.tokens.issue(&username, Utc::now())?;
    tracing::info!(%username, "Administrator logged in");

    Ok(ApiJson(LoginResponse { token }))
}
