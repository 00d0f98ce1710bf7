#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use portfolio_api::config::{AppConfig, DatabaseConfig};
use portfolio_api::database::Database;
use portfolio_api::{app, AppState};

pub const SECRET: &str = "test-secret";
pub const ADMIN: &str = "admin";
pub const PASSWORD: &str = "correct-horse";

/// An in-process server on its own port with a fresh in-memory database
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: Client,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.database = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    config.security.jwt_secret = SECRET.to_string();
    config.security.bcrypt_cost = 4;
    config
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with(config: AppConfig) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let db = Database::connect(&config.database).await?;
        let router = app(AppState::new(db, config));
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test port")?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let server = Self {
            port,
            base_url,
            client: Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn setup_admin(&self, username: &str, password: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url("/api/setup-admin"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url("/api/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?)
    }

    /// Create the default administrator and return a bearer token for it
    pub async fn admin_token(&self) -> Result<String> {
        let res = self.setup_admin(ADMIN, PASSWORD).await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "setup-admin returned {}", res.status());

        let body: Value = self.login(ADMIN, PASSWORD).await?.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("login response has no token")
    }

    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let res = self.client.get(self.url(path)).send().await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "GET {} returned {}", path, res.status());
        Ok(res.json().await?)
    }
}
