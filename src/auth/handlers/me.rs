/**
 * Current User Handler
 *
 * Implements GET /api/auth/me, which resolves the bearer token in the
 * Authorization header to the current user's profile.
 *
 * # Rejection States
 *
 * This handler parses the header itself rather than taking the `AuthUser`
 * extractor because its rejection taxonomy is finer-grained: an absent
 * token, a bad token, and a vanished subject are all distinct outcomes.
 */

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use crate::auth::handlers::types::UserResponse;
use crate::auth::sessions::{user_id_from_claims, verify_token};
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::bearer_token;
use crate::server::state::AppState;

/// Current user handler
///
/// # Errors
///
/// * `not_authenticated` (401) - no bearer token presented
/// * `invalid_token` (401) - malformed, expired, or badly-signed token,
///   or a token whose subject is missing
/// * `user_not_found` (404) - token subject no longer exists
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let token = bearer_token(&headers).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::NotAuthenticated
    })?;

    let claims = verify_token(&state.config.jwt_secret, token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::InvalidToken
    })?;

    let user_id = user_id_from_claims(&claims).ok_or_else(|| {
        tracing::warn!("Token subject missing or non-numeric");
        ApiError::InvalidToken
    })?;

    let user = get_user_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", user_id);
            ApiError::UserNotFound
        })?;

    Ok(Json(UserResponse::from(user)))
}
