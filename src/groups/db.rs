//! Database operations for groups, membership, and shared resources
//!
//! Membership is an explicit join-table row (`group_members`), inserted and
//! deleted directly rather than through collection mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::users::User;

/// Group row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    /// Unique numeric group id
    pub id: i64,
    /// Group title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// The topic this group is centered on
    pub topic_id: i64,
    /// The creating user
    pub created_by: i64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Shared resource row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GroupResource {
    /// Unique numeric resource id
    pub id: i64,
    /// Owning group
    pub group_id: i64,
    /// Resource title
    pub title: String,
    /// Resource URL
    pub url: String,
    /// Free-form type tag, e.g. "youtube" or "article"
    pub resource_type: String,
    /// The sharing user
    pub shared_by: i64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a group and enroll the creator as its first member
///
/// Both inserts run in one transaction so a group can never exist without
/// its creator in the member set.
pub async fn create_group(
    pool: &PgPool,
    topic_id: i64,
    title: &str,
    description: Option<&str>,
    created_by: i64,
) -> Result<Group, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let group = sqlx::query_as::<_, Group>(
        r#"
        INSERT INTO groups (title, description, topic_id, created_by)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, description, topic_id, created_by, created_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(topic_id)
    .bind(created_by)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO group_members (user_id, group_id)
        VALUES ($1, $2)
        "#,
    )
    .bind(created_by)
    .bind(group.id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(group)
}

/// Get a group by ID
pub async fn get_group(pool: &PgPool, group_id: i64) -> Result<Option<Group>, sqlx::Error> {
    let group = sqlx::query_as::<_, Group>(
        r#"
        SELECT id, title, description, topic_id, created_by, created_at
        FROM groups
        WHERE id = $1
        "#,
    )
    .bind(group_id)
    .fetch_optional(pool)
    .await?;

    Ok(group)
}

/// List all groups
pub async fn list_groups(pool: &PgPool) -> Result<Vec<Group>, sqlx::Error> {
    let groups = sqlx::query_as::<_, Group>(
        r#"
        SELECT id, title, description, topic_id, created_by, created_at
        FROM groups
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(groups)
}

/// List the groups a user belongs to
pub async fn groups_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Group>, sqlx::Error> {
    let groups = sqlx::query_as::<_, Group>(
        r#"
        SELECT g.id, g.title, g.description, g.topic_id, g.created_by, g.created_at
        FROM groups g
        JOIN group_members gm ON gm.group_id = g.id
        WHERE gm.user_id = $1
        ORDER BY g.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(groups)
}

/// Check whether a user is a member of a group
pub async fn is_member(pool: &PgPool, group_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM group_members
            WHERE group_id = $1 AND user_id = $2
        )
        "#,
    )
    .bind(group_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Add a user to a group's member set
pub async fn add_member(pool: &PgPool, group_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO group_members (user_id, group_id)
        VALUES ($1, $2)
        "#,
    )
    .bind(user_id)
    .bind(group_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a user from a group's member set
pub async fn remove_member(pool: &PgPool, group_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM group_members
        WHERE group_id = $1 AND user_id = $2
        "#,
    )
    .bind(group_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// List the member users of a group
pub async fn list_members(pool: &PgPool, group_id: i64) -> Result<Vec<User>, sqlx::Error> {
    let members = sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.name, u.email, u.password_hash, u.profile_picture, u.bio, u.created_at
        FROM users u
        JOIN group_members gm ON gm.user_id = u.id
        WHERE gm.group_id = $1
        ORDER BY u.id
        "#,
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(members)
}

/// Persist a shared resource in a group
pub async fn add_resource(
    pool: &PgPool,
    group_id: i64,
    title: &str,
    url: &str,
    resource_type: &str,
    shared_by: i64,
) -> Result<GroupResource, sqlx::Error> {
    let resource = sqlx::query_as::<_, GroupResource>(
        r#"
        INSERT INTO group_resources (group_id, title, url, resource_type, shared_by)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, group_id, title, url, resource_type, shared_by, created_at
        "#,
    )
    .bind(group_id)
    .bind(title)
    .bind(url)
    .bind(resource_type)
    .bind(shared_by)
    .fetch_one(pool)
    .await?;

    Ok(resource)
}

/// List a group's shared resources, newest first
pub async fn list_resources(
    pool: &PgPool,
    group_id: i64,
) -> Result<Vec<GroupResource>, sqlx::Error> {
    let resources = sqlx::query_as::<_, GroupResource>(
        r#"
        SELECT id, group_id, title, url, resource_type, shared_by, created_at
        FROM group_resources
        WHERE group_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(resources)
}
