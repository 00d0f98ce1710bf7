//! Salted password hashing for administrator credentials.
//!
//! bcrypt is CPU bound, so both operations run on the blocking pool.

use bcrypt::{hash, verify};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub async fn hash_password(password: String, cost: u32) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || hash(password, cost)).await??;
    Ok(hashed)
}

/// Compare `password` against a stored bcrypt hash. A corrupt hash never matches.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, PasswordError> {
    let matched = tokio::task::spawn_blocking(move || match verify(password, &password_hash) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::warn!("Stored password hash could not be checked: {}", e);
            false
        }
    })
    .await?;
    Ok(matched)
}
