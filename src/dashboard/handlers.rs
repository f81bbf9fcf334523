/**
 * Dashboard Handler
 *
 * Implements GET /api/dashboard, aggregating for the authenticated user:
 *
 * - the 10 most recent search-history entries, newest first
 * - all joined groups
 * - up to 5 recommended topics
 *
 * The recommendation policy is a deliberate placeholder: take the first 10
 * topics in storage order, drop any the user already marked as an
 * interest, and keep the first 5 of the remainder.
 */

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::groups::db::groups_for_user;
use crate::groups::handlers::GroupResponse;
use crate::middleware::auth::AuthUser;
use crate::search::db::{recent_searches, SearchHistory};
use crate::topics::db::{interest_topic_ids, list_topics, Topic};

/// Recent searches shown on the dashboard
const RECENT_SEARCH_LIMIT: i64 = 10;

/// Candidate topics considered for recommendation
const CANDIDATE_TOPIC_LIMIT: i64 = 10;

/// Recommended topics kept after filtering
const RECOMMENDED_TOPIC_LIMIT: usize = 5;

/// Dashboard response
#[derive(Serialize, Deserialize, Debug)]
pub struct DashboardResponse {
    pub recent_searches: Vec<SearchHistory>,
    pub joined_groups: Vec<GroupResponse>,
    pub recommended_topics: Vec<Topic>,
}

/// Filter candidate topics down to recommendations
///
/// Excludes every topic already in the user's interest set, then caps the
/// remainder. Candidate order is preserved.
fn recommend_topics(candidates: Vec<Topic>, interests: &[i64]) -> Vec<Topic> {
    candidates
        .into_iter()
        .filter(|topic| !interests.contains(&topic.id))
        .take(RECOMMENDED_TOPIC_LIMIT)
        .collect()
}

/// Dashboard handler
pub async fn get_dashboard(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    let recent = recent_searches(&pool, user.user_id, RECENT_SEARCH_LIMIT).await?;

    let groups = groups_for_user(&pool, user.user_id).await?;
    let mut joined_groups = Vec::with_capacity(groups.len());
    for group in groups {
        joined_groups.push(crate::groups::handlers::group_response(&pool, group).await?);
    }

    let candidates = list_topics(&pool, CANDIDATE_TOPIC_LIMIT).await?;
    let interests = interest_topic_ids(&pool, user.user_id).await?;
    let recommended_topics = recommend_topics(candidates, &interests);

    Ok(Json(DashboardResponse {
        recent_searches: recent,
        joined_groups,
        recommended_topics,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn topic(id: i64, name: &str) -> Topic {
        Topic {
            id,
            name: name.to_string(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_recommendations_exclude_interests() {
        let candidates = vec![topic(1, "algebra"), topic(2, "calculus"), topic(3, "rust")];
        let recommended = recommend_topics(candidates, &[2]);

        let ids: Vec<i64> = recommended.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_recommendations_capped_at_five() {
        let candidates: Vec<Topic> = (1..=10).map(|i| topic(i, &format!("t{}", i))).collect();
        let recommended = recommend_topics(candidates, &[]);

        assert_eq!(recommended.len(), 5);
        let ids: Vec<i64> = recommended.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_applies_before_cap() {
        // Interests knock out early candidates; later ones fill the cap.
        let candidates: Vec<Topic> = (1..=10).map(|i| topic(i, &format!("t{}", i))).collect();
        let recommended = recommend_topics(candidates, &[1, 2, 3]);

        let ids: Vec<i64> = recommended.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_all_interested_yields_empty() {
        let candidates = vec![topic(1, "a"), topic(2, "b")];
        let recommended = recommend_topics(candidates, &[1, 2]);
        assert!(recommended.is_empty());
    }
}
