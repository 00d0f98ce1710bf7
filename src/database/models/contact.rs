use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite, SqliteConnection};

use super::{merge_field, MissingFields};
use crate::database::DatabaseError;

/// Public contact details. Singleton, addressed like `About`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Contact {
    #[serde(skip)]
    pub id: i64,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Contact {
    pub async fn get<'e, E>(executor: E) -> Result<Option<Self>, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let contact = sqlx::query_as::<_, Contact>(
            "SELECT id, email, linkedin, github, message FROM contact ORDER BY id LIMIT 1",
        )
        .fetch_optional(executor)
        .await?;
        Ok(contact)
    }

    pub async fn upsert(
        conn: &mut SqliteConnection,
        input: &ContactInput,
        missing: MissingFields,
    ) -> Result<Self, DatabaseError> {
        let current = Self::get(&mut *conn).await?;
        let stored = current.as_ref();

        let email = merge_field(&input.email, stored.map(|c| c.email.as_str()), missing);
        let linkedin = merge_field(&input.linkedin, stored.map(|c| c.linkedin.as_str()), missing);
        let github = merge_field(&input.github, stored.map(|c| c.github.as_str()), missing);
        let message = merge_field(&input.message, stored.map(|c| c.message.as_str()), missing);

        let sql = match current {
            Some(_) => {
                "UPDATE contact SET email = ?, linkedin = ?, github = ?, message = ? \
                 WHERE id = ? RETURNING id, email, linkedin, github, message"
            }
            None => {
                "INSERT INTO contact (email, linkedin, github, message, id) VALUES (?, ?, ?, ?, ?) \
                 RETURNING id, email, linkedin, github, message"
            }
        };

        let contact = sqlx::query_as::<_, Contact>(sql)
            .bind(&email)
            .bind(&linkedin)
            .bind(&github)
            .bind(&message)
            .bind(current.as_ref().map(|c| c.id))
            .fetch_one(&mut *conn)
            .await?;

        Ok(contact)
    }
}
