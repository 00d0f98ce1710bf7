// handlers/public/health.rs - GET /health handler

use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use serde_json::{json, Value};

use crate::api::ApiJson;
use crate::AppState;

pub async fn health_get(State(state): State<AppState>) -> (StatusCode, ApiJson<Value>) {
    let now = Utc::now();

    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            ApiJson(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiJson(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
