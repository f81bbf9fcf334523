/**
 * Signup Handler
 *
 * Implements user registration for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate name, email format, and password length
 * 2. Reject if the email is already registered
 * 3. Hash the password with bcrypt
 * 4. Create the user
 * 5. Issue a bearer token
 *
 * # Validation
 *
 * - Name must be non-empty
 * - Email must contain '@' (basic validation)
 * - Password must be at least 8 characters long
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::auth::passwords::hash_password;
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::{is_unique_violation, ApiError};
use crate::server::state::AppState;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 8;

/// Validate signup input, returning the first violation found
fn validate_signup(request: &SignupRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("Name must not be empty".to_string()));
    }
    if !request.email.contains('@') {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Sign up handler
///
/// # Errors
///
/// * `validation_error` (400) - malformed name, email, or password
/// * `duplicate_email` (400) - email already registered
/// * `internal_error` (500) - hashing, token issuance, or database failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Signup request for email: {}", request.email);

    validate_signup(&request)?;

    if get_user_by_email(&state.pool, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash_password(&request.password)?;

    // A concurrent signup can beat the duplicate check; the unique
    // constraint on email catches it and maps to the same rejection.
    let user = create_user(&state.pool, &request.name, &request.email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email already registered: {}", request.email);
                ApiError::DuplicateEmail
            } else {
                e.into()
            }
        })?;

    let token = create_token(
        &state.config.jwt_secret,
        user.id,
        &user.email,
        state.config.token_ttl_minutes,
    )?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_input() {
        let result = validate_signup(&request("Ada", "ada@example.com", "password123"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let result = validate_signup(&request("  ", "ada@example.com", "password123"));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let result = validate_signup(&request("Ada", "not-an-email", "password123"));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let result = validate_signup(&request("Ada", "ada@example.com", "short"));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
