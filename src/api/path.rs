use axum::extract::FromRequestParts;

use crate::error::ApiError;

/// `Path` whose rejection (e.g. `/api/blog/abc`) is a JSON `ApiError::BadRequest`.
#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
