// handlers/public/auth/mod.rs - Token acquisition and administrator setup

use serde::Deserialize;

use crate::database::models::FieldErrors;
use crate::error::ApiError;

pub mod login; // POST /api/login - verify credentials and issue a token
pub mod setup; // POST /api/setup-admin - create an administrator

pub use login::login_post;
pub use setup::setup_admin_post;

/// Body shared by login and setup
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Username and password, or a 400 naming each absent or blank field.
    pub fn require(self) -> Result<(String, String), ApiError> {
        let username = self.username.filter(|u| !u.trim().is_empty());
        let password = self.password.filter(|p| !p.is_empty());

        let mut field_errors = FieldErrors::new();
        if username.is_none() {
            field_errors.insert("username".to_string(), "This field is required".to_string());
        }
        if password.is_none() {
            field_errors.insert("password".to_string(), "This field is required".to_string());
        }

        match (username, password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(ApiError::validation_error(
                "Username and password are required",
                field_errors,
            )),
        }
    }
}
