use anyhow::Context;
use serde_json::json;
use std::path::Path;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::Database;
use crate::services::{PortfolioDocument, TransferService};

/// Export to `output`, or print the document to stdout when no file is given
pub async fn export(
    config: &AppConfig,
    output: Option<&Path>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let db = Database::connect(&config.database)
        .await
        .context("failed to open database")?;
    let result = TransferService::new(db.clone()).export().await;
    db.close().await;

    let document = result.context("export failed")?;
    let body = serde_json::to_string_pretty(&document)?;

    match output {
        Some(path) => {
            std::fs::write(path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output_success(
                output_format,
                &format!("Exported portfolio to {}", path.display()),
                Some(json!({
                    "blog": document.blog.len(),
                    "projects": document.projects.len(),
                })),
            )
        }
        None => {
            println!("{}", body);
            Ok(())
        }
    }
}

pub async fn import(config: &AppConfig, file: &Path, output_format: OutputFormat) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let document: PortfolioDocument = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid portfolio document", file.display()))?;

    let db = Database::connect(&config.database)
        .await
        .context("failed to open database")?;
    let result = TransferService::new(db.clone()).import(&document).await;
    db.close().await;

    let summary = result.context("import failed, nothing was changed")?;
    output_success(
        output_format,
        "Import completed",
        Some(json!({ "blog": summary.blog, "projects": summary.projects })),
    )
}
