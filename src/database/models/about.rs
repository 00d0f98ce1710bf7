use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite, SqliteConnection};

use super::{merge_field, MissingFields};
use crate::database::DatabaseError;

/// The portfolio owner's profile. Singleton: the lowest-id row is the only one addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct About {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl About {
    pub async fn get<'e, E>(executor: E) -> Result<Option<Self>, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let about = sqlx::query_as::<_, About>(
            "SELECT id, name, title, bio, image_url FROM about ORDER BY id LIMIT 1",
        )
        .fetch_optional(executor)
        .await?;
        Ok(about)
    }

    /// Create the singleton if absent, otherwise overwrite it.
    ///
    /// Run inside a transaction when concurrent writers are possible.
    pub async fn upsert(
        conn: &mut SqliteConnection,
        input: &AboutInput,
        missing: MissingFields,
    ) -> Result<Self, DatabaseError> {
        let current = Self::get(&mut *conn).await?;

        let name = merge_field(&input.name, current.as_ref().map(|c| c.name.as_str()), missing);
        let title = merge_field(&input.title, current.as_ref().map(|c| c.title.as_str()), missing);
        let bio = merge_field(&input.bio, current.as_ref().map(|c| c.bio.as_str()), missing);
        let image_url = merge_field(
            &input.image_url,
            current.as_ref().map(|c| c.image_url.as_str()),
            missing,
        );

        let about = match current {
            Some(existing) => {
                sqlx::query_as::<_, About>(
                    "UPDATE about SET name = ?, title = ?, bio = ?, image_url = ? \
                     WHERE id = ? RETURNING id, name, title, bio, image_url",
                )
                .bind(&name)
                .bind(&title)
                .bind(&bio)
                .bind(&image_url)
                .bind(existing.id)
                .fetch_one(&mut *conn)
                .await?
            }
            None => {
                sqlx::query_as::<_, About>(
                    "INSERT INTO about (name, title, bio, image_url) VALUES (?, ?, ?, ?) \
                     RETURNING id, name, title, bio, image_url",
                )
                .bind(&name)
                .bind(&title)
                .bind(&bio)
                .bind(&image_url)
                .fetch_one(&mut *conn)
                .await?
            }
        };

        Ok(about)
    }
}
