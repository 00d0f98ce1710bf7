use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite};

use super::{require, FieldErrors};
use crate::database::DatabaseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Body of `POST /api/blog` and one entry of an import document's `blog` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostInput {
    /// Only honoured by import, so an exported document restores with the same ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostInput {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title);
        require(&mut errors, "content", &self.content);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Body of `PUT /api/blog/:id`; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPost {
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Self>, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let posts = sqlx::query_as::<_, BlogPost>(
            "SELECT id, title, content FROM blog_posts ORDER BY id",
        )
        .fetch_all(executor)
        .await?;
        Ok(posts)
    }

    /// Insert a validated input. `input.id` is used when present.
    pub async fn create<'e, E>(executor: E, input: &BlogPostInput) -> Result<Self, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, BlogPost>(
            "INSERT INTO blog_posts (id, title, content) VALUES (?, ?, ?) \
             RETURNING id, title, content",
        )
        .bind(input.id)
        .bind(input.title.as_deref().unwrap_or_default())
        .bind(input.content.as_deref().unwrap_or_default())
        .fetch_one(executor)
        .await
        .map_err(|e| {
            DatabaseError::from_write(
                e,
                format!("Blog post {} already exists", input.id.unwrap_or_default()),
            )
        })
    }

    pub async fn update<'e, E>(executor: E, id: i64, patch: &BlogPostPatch) -> Result<Self, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, BlogPost>(
            "UPDATE blog_posts SET title = COALESCE(?, title), content = COALESCE(?, content) \
             WHERE id = ? RETURNING id, title, content",
        )
        .bind(patch.title.as_deref())
        .bind(patch.content.as_deref())
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("Blog post {} not found", id)))
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> Result<(), DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Blog post {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> Result<u64, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM blog_posts").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
