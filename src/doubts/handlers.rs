/**
 * Doubt Handlers
 *
 * HTTP handlers for doubt endpoints:
 *
 * - `POST /api/doubts` - post a doubt (auth required)
 * - `GET /api/doubts` - list all doubts, newest first
 */

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::doubts::db::{self, Doubt};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Post doubt request
#[derive(Deserialize, Serialize, Debug)]
pub struct DoubtCreateRequest {
    /// Free-text topic tag
    pub topic: String,
    /// Question title
    pub title: String,
    /// Question body
    pub description: String,
}

/// Post doubt handler
///
/// # Errors
///
/// * `validation_error` (400) - empty topic, title, or description
pub async fn create_doubt(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<DoubtCreateRequest>,
) -> Result<Json<Doubt>, ApiError> {
    if request.topic.trim().is_empty()
        || request.title.trim().is_empty()
        || request.description.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Topic, title, and description must not be empty".to_string(),
        ));
    }

    let doubt = db::create_doubt(
        &pool,
        &request.topic,
        &request.title,
        &request.description,
        user.user_id,
    )
    .await?;

    tracing::info!("Doubt {} posted by user {}", doubt.id, user.user_id);

    Ok(Json(doubt))
}

/// List doubts handler
pub async fn list_doubts(State(pool): State<PgPool>) -> Result<Json<Vec<Doubt>>, ApiError> {
    let doubts = db::list_doubts(&pool).await?;
    Ok(Json(doubts))
}
