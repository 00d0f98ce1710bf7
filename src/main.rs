use clap::Parser;
use portfolio_api::cli::Cli;

#[tokio::main]
async fn main() {
    // Load .env if present so JWT_SECRET and DATABASE_URL can live there in development
    let _ = dotenvy::dotenv();
    portfolio_api::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = portfolio_api::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}
