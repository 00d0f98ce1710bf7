// handlers/protected/profile.rs - About and contact singletons
//
// Both routes upsert the single record. Fields left out of the request keep
// their stored value.

use axum::extract::State;
use serde_json::{json, Value};

use crate::api::ApiJson;
use crate::database::models::{About, AboutInput, Contact, ContactInput, MissingFields};
use crate::error::ApiError;
use crate::AppState;

/// POST /api/about - returns the stored record
pub async fn about_post(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AboutInput>,
) -> Result<ApiJson<About>, ApiError> {
    // Deferred transaction: a concurrent upsert that loses the write lock
    // fails with SQLITE_BUSY (500) and writes nothing
    let mut tx = state.db.pool().begin().await?;
    let about = About::upsert(&mut *tx, &input, MissingFields::Preserve).await?;
    tx.commit().await?;

    Ok(ApiJson(about))
}

/// POST /api/contact
pub async fn contact_post(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ContactInput>,
) -> Result<ApiJson<Value>, ApiError> {
    let mut tx = state.db.pool().begin().await?;
    Contact::upsert(&mut *tx, &input, MissingFields::Preserve).await?;
    tx.commit().await?;

    Ok(ApiJson(json!({ "message": "Contact info updated" })))
}
