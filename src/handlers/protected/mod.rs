// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Security Level: administrator token, checked by `middleware::require_admin`
// Routes: POST/PUT/DELETE on /api/blog and /api/projects,
//         POST /api/about, POST /api/contact, GET /api/export, POST /api/import
//
// Each handler may read the verified `AuthAdmin` from request extensions.

pub mod blog;
pub mod profile;
pub mod projects;
pub mod transfer;

pub use blog::{blog_delete, blog_post, blog_put};
pub use profile::{about_post, contact_post};
pub use projects::{project_delete, project_post, project_put};
pub use transfer::{export_get, import_post};

use crate::database::models::FieldErrors;
use crate::error::ApiError;

pub(crate) fn missing_fields(field_errors: FieldErrors) -> ApiError {
    ApiError::validation_error("Missing required fields", field_errors)
}
