/**
 * Group Handlers
 *
 * HTTP handlers for group endpoints:
 *
 * - `POST /api/groups` - create a group (auth required)
 * - `GET /api/groups` - list all groups
 * - `GET /api/groups/{group_id}` - get one group
 * - `POST /api/groups/{group_id}/join` - join (auth required)
 * - `POST /api/groups/{group_id}/leave` - leave (auth required)
 * - `POST /api/groups/{group_id}/resources` - share a resource (members only)
 * - `GET /api/groups/{group_id}/resources` - list shared resources
 */

use axum::extract::{Path, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::error::{is_unique_violation, ApiError};
use crate::groups::db::{self, Group, GroupResource};
use crate::middleware::auth::AuthUser;
use crate::topics::db::get_topic_by_id;

/// Create group request
#[derive(Deserialize, Serialize, Debug)]
pub struct GroupCreateRequest {
    /// Topic the group is centered on; must already exist
    pub topic_id: i64,
    /// Group title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
}

/// Share resource request
#[derive(Deserialize, Serialize, Debug)]
pub struct ResourceCreateRequest {
    /// Resource title
    pub title: String,
    /// Resource URL
    pub url: String,
    /// Free-form type tag, e.g. "youtube" or "article"
    pub resource_type: String,
}

/// Group response, including the member profiles
#[derive(Serialize, Deserialize, Debug)]
pub struct GroupResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub topic_id: i64,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    /// Current member set
    pub members: Vec<UserResponse>,
}

/// Shared resource response
#[derive(Serialize, Deserialize, Debug)]
pub struct GroupResourceResponse {
    pub id: i64,
    pub group_id: i64,
    pub title: String,
    pub url: String,
    pub resource_type: String,
    pub shared_by: i64,
    pub created_at: DateTime<Utc>,
}

/// Plain acknowledgement response
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl From<GroupResource> for GroupResourceResponse {
    fn from(r: GroupResource) -> Self {
        Self {
            id: r.id,
            group_id: r.group_id,
            title: r.title,
            url: r.url,
            resource_type: r.resource_type,
            shared_by: r.shared_by,
            created_at: r.created_at,
        }
    }
}

/// Build a `GroupResponse` by loading the group's member set
pub(crate) async fn group_response(pool: &PgPool, group: Group) -> Result<GroupResponse, sqlx::Error> {
    let members = db::list_members(pool, group.id)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(GroupResponse {
        id: group.id,
        title: group.title,
        description: group.description,
        topic_id: group.topic_id,
        created_by: group.created_by,
        created_at: group.created_at,
        members,
    })
}

/// Create group handler
///
/// Creates a group owned by the actor and auto-enrolls them as the first
/// member in the same transaction.
///
/// # Errors
///
/// * `validation_error` (400) - empty title
/// * `topic_not_found` (404) - the referenced topic does not exist
pub async fn create_group(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<GroupCreateRequest>,
) -> Result<Json<GroupResponse>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation("Title must not be empty".to_string()));
    }

    if get_topic_by_id(&pool, request.topic_id).await?.is_none() {
        tracing::warn!("Group creation with unknown topic: {}", request.topic_id);
        return Err(ApiError::TopicNotFound);
    }

    let group = db::create_group(
        &pool,
        request.topic_id,
        &request.title,
        request.description.as_deref(),
        user.user_id,
    )
    .await?;

    tracing::info!("Group {} created by user {}", group.id, user.user_id);

    Ok(Json(group_response(&pool, group).await?))
}

/// List groups handler
pub async fn list_groups(State(pool): State<PgPool>) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    let groups = db::list_groups(&pool).await?;

    let mut responses = Vec::with_capacity(groups.len());
    for group in groups {
        responses.push(group_response(&pool, group).await?);
    }

    Ok(Json(responses))
}

/// Get group handler
///
/// # Errors
///
/// * `group_not_found` (404)
pub async fn get_group(
    State(pool): State<PgPool>,
    Path(group_id): Path<i64>,
) -> Result<Json<GroupResponse>, ApiError> {
    let group = db::get_group(&pool, group_id)
        .await?
        .ok_or(ApiError::GroupNotFound)?;

    Ok(Json(group_response(&pool, group).await?))
}

/// Join group handler
///
/// # Errors
///
/// * `group_not_found` (404)
/// * `already_member` (400) - joining twice is rejected, not ignored
pub async fn join_group(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
) -> Result<Json<GroupResponse>, ApiError> {
    let group = db::get_group(&pool, group_id)
        .await?
        .ok_or(ApiError::GroupNotFound)?;

    if db::is_member(&pool, group_id, user.user_id).await? {
        tracing::warn!("User {} already in group {}", user.user_id, group_id);
        return Err(ApiError::AlreadyMember);
    }

    // A concurrent join can beat the membership check; the composite
    // primary key catches it and maps to the same rejection.
    db::add_member(&pool, group_id, user.user_id)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("User {} already in group {}", user.user_id, group_id);
                ApiError::AlreadyMember
            } else {
                e.into()
            }
        })?;
    tracing::info!("User {} joined group {}", user.user_id, group_id);

    Ok(Json(group_response(&pool, group).await?))
}

/// Leave group handler
///
/// # Errors
///
/// * `group_not_found` (404)
/// * `not_member` (400) - leaving while not a member is rejected
pub async fn leave_group(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if db::get_group(&pool, group_id).await?.is_none() {
        return Err(ApiError::GroupNotFound);
    }

    if !db::is_member(&pool, group_id, user.user_id).await? {
        tracing::warn!("User {} not in group {}", user.user_id, group_id);
        return Err(ApiError::NotMember);
    }

    db::remove_member(&pool, group_id, user.user_id).await?;
    tracing::info!("User {} left group {}", user.user_id, group_id);

    Ok(Json(MessageResponse {
        message: "Left group successfully".to_string(),
    }))
}

/// Share resource handler
///
/// # Errors
///
/// * `validation_error` (400) - empty title or URL
/// * `group_not_found` (404)
/// * `forbidden` (403) - the actor is not a member; no row is persisted
pub async fn add_resource(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
    Json(request): Json<ResourceCreateRequest>,
) -> Result<Json<GroupResourceResponse>, ApiError> {
    if request.title.trim().is_empty() || request.url.trim().is_empty() {
        return Err(ApiError::Validation(
            "Title and URL must not be empty".to_string(),
        ));
    }

    if db::get_group(&pool, group_id).await?.is_none() {
        return Err(ApiError::GroupNotFound);
    }

    if !db::is_member(&pool, group_id, user.user_id).await? {
        tracing::warn!(
            "Non-member {} tried to share into group {}",
            user.user_id,
            group_id
        );
        return Err(ApiError::Forbidden);
    }

    let resource = db::add_resource(
        &pool,
        group_id,
        &request.title,
        &request.url,
        &request.resource_type,
        user.user_id,
    )
    .await?;

    tracing::info!(
        "Resource {} shared into group {} by user {}",
        resource.id,
        group_id,
        user.user_id
    );

    Ok(Json(GroupResourceResponse::from(resource)))
}

/// List resources handler
///
/// # Errors
///
/// * `group_not_found` (404)
pub async fn list_resources(
    State(pool): State<PgPool>,
    Path(group_id): Path<i64>,
) -> Result<Json<Vec<GroupResourceResponse>>, ApiError> {
    if db::get_group(&pool, group_id).await?.is_none() {
        return Err(ApiError::GroupNotFound);
    }

    let resources = db::list_resources(&pool, group_id)
        .await?
        .into_iter()
        .map(GroupResourceResponse::from)
        .collect();

    Ok(Json(resources))
}
