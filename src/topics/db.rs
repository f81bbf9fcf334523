//! Database operations for topics and user interests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Topic row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topic {
    /// Unique numeric topic id
    pub id: i64,
    /// Unique topic name (the search term)
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Get a topic by name
pub async fn get_topic_by_name(pool: &PgPool, name: &str) -> Result<Option<Topic>, sqlx::Error> {
    let topic = sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, name, description, created_at
        FROM topics
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(topic)
}

/// Get a topic by ID
pub async fn get_topic_by_id(pool: &PgPool, id: i64) -> Result<Option<Topic>, sqlx::Error> {
    let topic = sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, name, description, created_at
        FROM topics
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(topic)
}

/// Find a topic by name, creating it on first use
///
/// Concurrent creations of the same name are resolved by the unique
/// constraint: `ON CONFLICT DO NOTHING` followed by a reselect means at
/// most one row per name ever exists.
pub async fn find_or_create_topic(pool: &PgPool, name: &str) -> Result<Topic, sqlx::Error> {
    if let Some(topic) = get_topic_by_name(pool, name).await? {
        return Ok(topic);
    }

    let inserted = sqlx::query_as::<_, Topic>(
        r#"
        INSERT INTO topics (name)
        VALUES ($1)
        ON CONFLICT (name) DO NOTHING
        RETURNING id, name, description, created_at
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(topic) => Ok(topic),
        // Lost the insert race; the row exists now.
        None => get_topic_by_name(pool, name)
            .await?
            .ok_or(sqlx::Error::RowNotFound),
    }
}

/// List topics in storage order
pub async fn list_topics(pool: &PgPool, limit: i64) -> Result<Vec<Topic>, sqlx::Error> {
    let topics = sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, name, description, created_at
        FROM topics
        ORDER BY id
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(topics)
}

/// Get the topic ids a user has marked as interests
pub async fn interest_topic_ids(pool: &PgPool, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    let ids = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT topic_id
        FROM user_interests
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Mark a topic as an interest of a user (idempotent)
pub async fn add_interest(pool: &PgPool, user_id: i64, topic_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_interests (user_id, topic_id)
        VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(topic_id)
    .execute(pool)
    .await?;

    Ok(())
}
