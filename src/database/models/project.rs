use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite};

use super::{require, FieldErrors};
use crate::database::DatabaseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Body of `POST /api/projects` and one entry of an import document's `projects` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Optional; stored as empty string when absent.
    pub link: Option<String>,
}

impl ProjectInput {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title);
        require(&mut errors, "description", &self.description);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl Project {
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Self>, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, title, description, link FROM projects ORDER BY id",
        )
        .fetch_all(executor)
        .await?;
        Ok(projects)
    }

    pub async fn create<'e, E>(executor: E, input: &ProjectInput) -> Result<Self, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (id, title, description, link) VALUES (?, ?, ?, ?) \
             RETURNING id, title, description, link",
        )
        .bind(input.id)
        .bind(input.title.as_deref().unwrap_or_default())
        .bind(input.description.as_deref().unwrap_or_default())
        .bind(input.link.as_deref().unwrap_or_default())
        .fetch_one(executor)
        .await
        .map_err(|e| {
            DatabaseError::from_write(
                e,
                format!("Project {} already exists", input.id.unwrap_or_default()),
            )
        })
    }

    pub async fn update<'e, E>(executor: E, id: i64, patch: &ProjectPatch) -> Result<Self, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET title = COALESCE(?, title), description = COALESCE(?, description), \
             link = COALESCE(?, link) WHERE id = ? RETURNING id, title, description, link",
        )
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.link.as_deref())
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("Project {} not found", id)))
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> Result<(), DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Project {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> Result<u64, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM projects").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
