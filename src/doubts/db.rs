//! Database operations for doubts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Doubt row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doubt {
    /// Unique numeric id
    pub id: i64,
    /// Free-text topic tag (not a topics FK)
    pub topic: String,
    /// Question title
    pub title: String,
    /// Question body
    pub description: String,
    /// The posting user
    pub created_by: i64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Persist a new doubt
pub async fn create_doubt(
    pool: &PgPool,
    topic: &str,
    title: &str,
    description: &str,
    created_by: i64,
) -> Result<Doubt, sqlx::Error> {
    let doubt = sqlx::query_as::<_, Doubt>(
        r#"
        INSERT INTO doubts (topic, title, description, created_by)
        VALUES ($1, $2, $3, $4)
        RETURNING id, topic, title, description, created_by, created_at
        "#,
    )
    .bind(topic)
    .bind(title)
    .bind(description)
    .bind(created_by)
    .fetch_one(pool)
    .await?;

    Ok(doubt)
}

/// List all doubts, newest first
pub async fn list_doubts(pool: &PgPool) -> Result<Vec<Doubt>, sqlx::Error> {
    let doubts = sqlx::query_as::<_, Doubt>(
        r#"
        SELECT id, topic, title, description, created_by, created_at
        FROM doubts
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(doubts)
}
