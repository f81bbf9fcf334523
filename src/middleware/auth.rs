/**
 * Authentication Extractor
 *
 * Protects routes that require an authenticated user. The `AuthUser`
 * extractor pulls the bearer token out of the Authorization header,
 * verifies signature and expiry, confirms the subject still exists in the
 * database, and hands the handler an `AuthenticatedUser`. Handlers opt in
 * to authentication by taking `AuthUser` as a parameter; routes without it
 * stay public.
 */

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::auth::sessions::{user_id_from_claims, verify_token};
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// Numeric user id (token subject)
    pub user_id: i64,
    /// Email carried in the token claims
    pub email: String,
}

/// Extract the bearer token from an Authorization header, if present
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Axum extractor for the authenticated user
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Confirms the subject still exists in the database
///
/// Rejects with `not_authenticated` when no token is presented and
/// `invalid_token` when verification fails or the subject is gone.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            ApiError::NotAuthenticated
        })?;

        let claims = verify_token(&app_state.config.jwt_secret, token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            ApiError::InvalidToken
        })?;

        let user_id = user_id_from_claims(&claims).ok_or_else(|| {
            tracing::warn!("Token subject missing or non-numeric");
            ApiError::InvalidToken
        })?;

        // A valid signature is not enough; the subject must still exist.
        if get_user_by_id(&app_state.pool, user_id).await?.is_none() {
            tracing::warn!("Token subject no longer exists: {}", user_id);
            return Err(ApiError::InvalidToken);
        }

        Ok(AuthUser(AuthenticatedUser {
            user_id,
            email: claims.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::Request;

    use crate::search::external::SearchClient;
    use crate::server::config::AppConfig;

    fn test_state() -> AppState {
        let config = AppConfig {
            database_url: "postgres://localhost/unused".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 30,
            youtube_api_key: None,
            search_api_key: None,
            cors_origins: vec![],
            port: 0,
        };
        let search = SearchClient::new(&config);
        // Lazy pool: never touched on the rejection paths under test.
        let pool = sqlx::PgPool::connect_lazy(&config.database_url).unwrap();
        AppState {
            pool,
            config: Arc::new(config),
            search,
        }
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("http://example.com");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn test_bearer_token_extraction() {
        let parts = parts_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts.headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let parts = parts_with_auth(None);
        assert_eq!(bearer_token(&parts.headers), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));
        assert_eq!(bearer_token(&parts.headers), None);
    }

    #[tokio::test]
    async fn test_missing_token_is_not_authenticated() {
        let state = test_state();
        let mut parts = parts_with_auth(None);

        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(ApiError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_garbage_token_is_invalid() {
        let state = test_state();
        let mut parts = parts_with_auth(Some("Bearer not.a.jwt"));

        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_wrongly_signed_token_is_invalid() {
        let state = test_state();
        let token =
            crate::auth::sessions::create_token("another-secret", 1, "a@example.com", 30).unwrap();
        let header = format!("Bearer {}", token);
        let mut parts = parts_with_auth(Some(&header));

        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }
}
