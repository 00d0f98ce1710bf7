pub mod commands;
pub mod utils;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Portfolio content API - serve the API and manage its data")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run migrations and start the HTTP server")]
    Serve,

    #[command(about = "Run database migrations and exit")]
    Migrate,

    #[command(about = "Create an administrator account")]
    CreateAdmin {
        #[arg(help = "Administrator username")]
        username: String,
        #[arg(help = "Administrator password")]
        password: String,
    },

    #[command(about = "Write all portfolio content as one JSON document")]
    Export {
        #[arg(short, long, help = "Output file (defaults to stdout)")]
        output: Option<PathBuf>,
    },

    #[command(about = "Replace all portfolio content from a JSON document")]
    Import {
        #[arg(help = "Path to an exported JSON document")]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = AppConfig::from_env().context("invalid configuration")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => crate::serve(config).await,
        Commands::Migrate => commands::database::migrate(&config, output_format).await,
        Commands::CreateAdmin { username, password } => {
            commands::admin::create(&config, &username, &password, output_format).await
        }
        Commands::Export { output } => {
            commands::transfer::export(&config, output.as_deref(), output_format).await
        }
        Commands::Import { file } => commands::transfer::import(&config, &file, output_format).await,
    }
}
