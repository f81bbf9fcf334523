/**
 * Search Handler
 *
 * Implements GET /api/search/{topic}.
 *
 * # Order of Operations
 *
 * 1. Record a search-history row for the actor - unconditionally, before
 *    anything that could degrade
 * 2. Find-or-create the Topic row by name
 * 3. Query the video and article adapters concurrently
 *
 * The external queries are infallible by contract; the handler can only
 * fail on database errors.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::search::db::record_search;
use crate::search::external::{ArticleResult, VideoResult};
use crate::server::state::AppState;
use crate::topics::db::find_or_create_topic;

/// Combined search results
#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResultsResponse {
    pub videos: Vec<VideoResult>,
    pub articles: Vec<ArticleResult>,
}

/// Search topic handler
///
/// # Errors
///
/// * `validation_error` (400) - empty topic string
/// * `internal_error` (500) - database failure
pub async fn search_topic(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(topic): Path<String>,
) -> Result<Json<SearchResultsResponse>, ApiError> {
    let topic = topic.trim().to_string();
    if topic.is_empty() {
        return Err(ApiError::Validation("Topic must not be empty".to_string()));
    }

    tracing::info!("User {} searching for {:?}", user.user_id, topic);

    record_search(&state.pool, user.user_id, &topic).await?;

    find_or_create_topic(&state.pool, &topic).await?;

    let (videos, articles) = tokio::join!(
        state.search.search_videos(&topic),
        state.search.search_articles(&topic),
    );

    Ok(Json(SearchResultsResponse { videos, articles }))
}
