use crate::auth::password::{hash_password, verify_password, PasswordError};
use crate::database::models::Admin;
use crate::database::{Database, DatabaseError};

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Administrator already exists: {0}")]
    AlreadyExists(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl From<PasswordError> for AdminError {
    fn from(err: PasswordError) -> Self {
        AdminError::Hashing(err.to_string())
    }
}

/// Credential store for the administrators allowed to edit content.
#[derive(Clone)]
pub struct AdminService {
    db: Database,
    bcrypt_cost: u32,
}

impl AdminService {
    pub fn new(db: Database, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Store a new administrator with a salted hash of `password`.
    pub async fn create_admin(&self, username: &str, password: &str) -> Result<Admin, AdminError> {
        if Admin::exists(self.db.pool(), username).await? {
            return Err(AdminError::AlreadyExists(username.to_string()));
        }

        let password_hash = hash_password(password.to_string(), self.bcrypt_cost).await?;

        // A concurrent setup can still win the race; the unique index reports it
        let admin = match Admin::insert(self.db.pool(), username, &password_hash).await {
            Ok(admin) => admin,
            Err(DatabaseError::Conflict(_)) => {
                return Err(AdminError::AlreadyExists(username.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(username = %admin.username, "Administrator created");
        Ok(admin)
    }

    /// Check credentials. Unknown usernames fail closed.
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<bool, AdminError> {
        let Some(admin) = Admin::find_by_username(self.db.pool(), username).await? else {
            return Ok(false);
        };

        Ok(verify_password(password.to_string(), admin.password_hash).await?)
    }

    pub async fn exists(&self, username: &str) -> Result<bool, AdminError> {
        Ok(Admin::exists(self.db.pool(), username).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    async fn service() -> AdminService {
        let db = Database::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
        .unwrap();
        AdminService::new(db, 4)
    }

    #[tokio::test]
    async fn creates_and_verifies_admin() {
        let admins = service().await;
        let admin = admins.create_admin("a", "p").await.unwrap();
        assert_eq!(admin.username, "a");
        assert_ne!(admin.password_hash, "p");

        assert!(admins.verify_password("a", "p").await.unwrap());
        assert!(!admins.verify_password("a", "wrong").await.unwrap());
        assert!(admins.exists("a").await.unwrap());
    }

    #[tokio::test]
    async fn unknown_username_fails_closed() {
        let admins = service().await;
        assert!(!admins.verify_password("nobody", "p").await.unwrap());
        assert!(!admins.exists("nobody").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let admins = service().await;
        admins.create_admin("a", "p").await.unwrap();
        let err = admins.create_admin("a", "other").await.unwrap_err();
        assert!(matches!(err, AdminError::AlreadyExists(ref name) if name == "a"));
    }
}
