pub mod password;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SecurityConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Administrator username
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(username: &str, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: username.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Bad signature, malformed token or past expiry. Deliberately not more specific.
    #[error("invalid token")]
    Invalid,

    #[error("JWT generation error: {0}")]
    Generation(String),
}

/// Issues and verifies session tokens with a process-wide HS256 key.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        // Expiry is checked against the caller's clock in `verify`
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn from_config(security: &SecurityConfig) -> Self {
        Self::new(&security.jwt_secret, Duration::seconds(security.jwt_expiry_secs))
    }

    /// Sign a token for `username` valid until `now + ttl`.
    pub fn issue(&self, username: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::new(username, now, self.ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded username.
    ///
    /// Does not check that the administrator still exists; the gate does that.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            TokenError::Invalid
        })?;

        if now.timestamp() >= data.claims.exp {
            tracing::debug!(sub = %data.claims.sub, "Token expired");
            return Err(TokenError::Invalid);
        }

        Ok(data.claims.sub)
    }
}
