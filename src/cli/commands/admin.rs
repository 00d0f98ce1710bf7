use anyhow::{bail, Context};
use serde_json::json;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::Database;
use crate::services::AdminService;

pub async fn create(
    config: &AppConfig,
    username: &str,
    password: &str,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    if username.trim().is_empty() || password.is_empty() {
        bail!("username and password must not be empty");
    }

    let db = Database::connect(&config.database)
        .await
        .context("failed to open database")?;
    let admins = AdminService::new(db.clone(), config.security.bcrypt_cost);

    let result = admins.create_admin(username, password).await;
    db.close().await;
    let admin = result.with_context(|| format!("failed to create administrator '{}'", username))?;

    output_success(
        output_format,
        &format!("Administrator '{}' created", admin.username),
        Some(json!({ "username": admin.username, "created_at": admin.created_at })),
    )
}
