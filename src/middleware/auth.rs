use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::error::ApiError;
use crate::AppState;

/// Administrator verified by the gate, available to handlers as an extension
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthAdmin {
    pub username: String,
}

/// Bearer token gate for every mutating route.
///
/// Rejects with 403 before the handler runs, so a refused request never
/// touches the content store.
pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(|msg| {
        tracing::warn!(path = %request.uri().path(), "Rejected request: {}", msg);
        ApiError::forbidden(msg)
    })?;

    let username = state.tokens.verify(token, Utc::now()).map_err(|e| {
        tracing::warn!(path = %request.uri().path(), "Rejected token");
        ApiError::from(e)
    })?;

    if state.config.security.recheck_admin && !state.admins.exists(&username).await? {
        tracing::warn!(%username, "Token names an administrator that no longer exists");
        return Err(ApiError::forbidden("Token is invalid or expired"));
    }

    request.extensions_mut().insert(AuthAdmin { username });
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or("Missing Authorization header")?
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or("Authorization header must use Bearer token format")?
        .trim();

    if token.is_empty() {
        return Err("Empty bearer token");
    }
    Ok(token)
}
