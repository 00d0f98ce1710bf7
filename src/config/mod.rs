use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Range accepted by the bcrypt algorithm.
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// HS256 signing key for session tokens. Never defaulted.
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub jwt_expiry_secs: i64,
    pub bcrypt_cost: u32,
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    /// Re-check on every gated request that the token's administrator still exists.
    pub recheck_admin: bool,
}

impl AppConfig {
    /// Build configuration from the process environment.
    ///
    /// Fails when `JWT_SECRET` is unset or empty, or when an override cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        let config = match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        };

        config.with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Some(v) = parse_var("DATABASE_MAX_CONNECTIONS")? {
            self.database.max_connections = v;
        }

        // API overrides
        if let Ok(v) = env::var("HOST") {
            self.api.host = v;
        }
        if let Some(v) = parse_var("PORT")? {
            self.api.port = v;
        }
        if let Some(v) = parse_var("API_MAX_REQUEST_SIZE_BYTES")? {
            self.api.max_request_size_bytes = v;
        }

        // Security overrides
        self.security.jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        if let Some(v) = parse_var("JWT_EXPIRY_SECS")? {
            self.security.jwt_expiry_secs = v;
        }
        if let Some(v) = parse_var("BCRYPT_COST")? {
            self.security.bcrypt_cost = v;
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(v) = parse_var("SECURITY_RECHECK_ADMIN")? {
            self.security.recheck_admin = v;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }
        if self.security.jwt_expiry_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY_SECS",
                value: self.security.jwt_expiry_secs.to_string(),
            });
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.security.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: self.security.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                url: "sqlite://portfolio.db".to_string(),
                max_connections: 5,
            },
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                max_request_size_bytes: 2 * 1024 * 1024, // 2MB
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_secs: 60 * 60,
                bcrypt_cost: bcrypt::DEFAULT_COST,
                cors_origins: Vec::new(),
                recheck_admin: true,
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                url: "sqlite://portfolio.db".to_string(),
                max_connections: 10,
            },
            api: ApiConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                max_request_size_bytes: 2 * 1024 * 1024,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_secs: 60 * 60,
                bcrypt_cost: bcrypt::DEFAULT_COST,
                cors_origins: Vec::new(),
                recheck_admin: true,
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(None),
    }
}
