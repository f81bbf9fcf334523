/**
 * Login Handler
 *
 * Implements user authentication for POST /api/auth/login.
 *
 * # Security Notes
 *
 * - A nonexistent email and a wrong password both produce the identical
 *   `invalid_credentials` rejection, so responses never reveal which
 *   emails are registered
 * - Password verification goes through bcrypt
 * - Passwords are never logged or returned
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::passwords::verify_password;
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `invalid_credentials` (401) - unknown email or wrong password
/// * `internal_error` (500) - token issuance or database failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for email: {}", request.email);

    let user = get_user_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email");
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Login failed: password mismatch for user {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(
        &state.config.jwt_secret,
        user.id,
        &user.email,
        state.config.token_ttl_minutes,
    )?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}
