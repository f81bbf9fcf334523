//! Database operations for search history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Search history row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SearchHistory {
    /// Unique numeric id
    pub id: i64,
    /// The searching user
    pub user_id: i64,
    /// The searched topic string
    pub topic: String,
    /// When the search happened
    pub searched_at: DateTime<Utc>,
}

/// Record a search for a user
///
/// Every search is recorded, including repeats of the same topic.
pub async fn record_search(
    pool: &PgPool,
    user_id: i64,
    topic: &str,
) -> Result<SearchHistory, sqlx::Error> {
    let entry = sqlx::query_as::<_, SearchHistory>(
        r#"
        INSERT INTO search_history (user_id, topic)
        VALUES ($1, $2)
        RETURNING id, user_id, topic, searched_at
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

/// Get a user's most recent searches, newest first
pub async fn recent_searches(
    pool: &PgPool,
    user_id: i64,
    limit: i64,
) -> Result<Vec<SearchHistory>, sqlx::Error> {
    let entries = sqlx::query_as::<_, SearchHistory>(
        r#"
        SELECT id, user_id, topic, searched_at
        FROM search_history
        WHERE user_id = $1
        ORDER BY searched_at DESC, id DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}
