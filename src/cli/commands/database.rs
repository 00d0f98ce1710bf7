use anyhow::Context;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::Database;

pub async fn migrate(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let db = Database::connect(&config.database)
        .await
        .context("failed to migrate database")?;
    db.close().await;

    output_success(output_format, "Database is up to date", None)
}
