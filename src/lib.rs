pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::auth::TokenService;
use crate::config::{AppConfig, SecurityConfig};
use crate::database::Database;
use crate::services::{AdminService, TransferService};

/// Everything a handler needs, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
    pub tokens: Arc<TokenService>,
    pub admins: AdminService,
    pub transfer: TransferService,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        Self {
            tokens: Arc::new(TokenService::from_config(&config.security)),
            admins: AdminService::new(db.clone(), config.security.bcrypt_cost),
            transfer: TransferService::new(db.clone()),
            config: Arc::new(config),
            db,
        }
    }
}

/// Build the full router: public reads and credentials, plus the gated writes.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security);
    let body_limit = state.config.api.max_request_size_bytes;

    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public;

    Router::new()
        .route("/health", get(public::health_get))
        .route("/api/blog", get(public::blog_list))
        .route("/api/projects", get(public::projects_list))
        .route("/api/about", get(public::about_get))
        .route("/api/contact", get(public::contact_get))
        .route("/api/setup-admin", post(public::setup_admin_post))
        .route("/api/login", post(public::login_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::protected;

    Router::new()
        .route("/api/blog", post(protected::blog_post))
        .route(
            "/api/blog/:id",
            delete(protected::blog_delete).put(protected::blog_put),
        )
        .route("/api/projects", post(protected::project_post))
        .route(
            "/api/projects/:id",
            delete(protected::project_delete).put(protected::project_put),
        )
        .route("/api/about", post(protected::about_post))
        .route("/api/contact", post(protected::contact_post))
        .route("/api/export", get(protected::export_get))
        .route("/api/import", post(protected::import_post))
        // route_layer: unmatched paths still 404 instead of 403
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::require_admin,
        ))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_api=info,tower_http=info"));

    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Connect, migrate and serve until Ctrl-C.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    use anyhow::Context;

    let db = Database::connect(&config.database)
        .await
        .context("failed to open database")?;

    let bind_addr = format!("{}:{}", config.api.host, config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!(
        "Starting portfolio API in {:?} mode on http://{}",
        config.environment,
        bind_addr
    );

    if config.is_production() && config.security.cors_origins.is_empty() {
        tracing::warn!("SECURITY_CORS_ORIGINS is empty; any origin may call the API");
    }

    let state = AppState::new(db.clone(), config);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
