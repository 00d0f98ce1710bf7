// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Routes: GET /health, GET /api/{blog,projects,about,contact},
//         POST /api/setup-admin, POST /api/login

pub mod auth;
pub mod content;
pub mod health;

pub use auth::{login_post, setup_admin_post};
pub use content::{about_get, blog_list, contact_get, projects_list};
pub use health::health_get;
