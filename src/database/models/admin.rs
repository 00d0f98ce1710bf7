use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, Sqlite};

use crate::database::DatabaseError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub async fn find_by_username<'e, E>(executor: E, username: &str) -> Result<Option<Self>, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash, created_at FROM admins WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(executor)
        .await?;
        Ok(admin)
    }

    pub async fn exists<'e, E>(executor: E, username: &str) -> Result<bool, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admins WHERE username = ?")
            .bind(username)
            .fetch_one(executor)
            .await?;
        Ok(count > 0)
    }

    /// Insert a new administrator. A taken username is reported as `Conflict`.
    pub async fn insert<'e, E>(executor: E, username: &str, password_hash: &str) -> Result<Self, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (username, password_hash, created_at) VALUES (?, ?, ?) \
             RETURNING id, username, password_hash, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(executor)
        .await
        .map_err(|e| DatabaseError::from_write(e, format!("Administrator '{}' already exists", username)))
    }
}
