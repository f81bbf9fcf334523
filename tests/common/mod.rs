//! Shared test fixtures
//!
//! Database-backed tests need a reachable PostgreSQL instance. When
//! `DATABASE_URL` is not set the fixture returns `None` and the test
//! skips itself; combined with `#[serial]` this keeps the suite green in
//! environments without a database while exercising the full stack where
//! one is available.

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use std::sync::Arc;

use sqlx::PgPool;

use learnconnect::auth::handlers::types::{AuthResponse, SignupRequest};
use learnconnect::middleware::auth::{AuthUser, AuthenticatedUser};
use learnconnect::search::external::SearchClient;
use learnconnect::server::config::AppConfig;
use learnconnect::server::state::AppState;

/// Signing secret used by every test token
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Test database fixture wrapping a fully constructed `AppState`
pub struct TestDb {
    pub state: AppState,
}

impl TestDb {
    /// Connect to the test database, run migrations, and wipe all data
    ///
    /// Returns `None` (skip) when `DATABASE_URL` is not set.
    pub async fn connect() -> Option<TestDb> {
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("DATABASE_URL not set; skipping database-backed test");
                return None;
            }
        };

        let pool = PgPool::connect(&url)
            .await
            .expect("failed to connect to test database");

        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("failed to run migrations");

        cleanup(&pool).await;

        let config = AppConfig {
            database_url: url,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            token_ttl_minutes: 30,
            // No credentials: search adapters stay in placeholder mode.
            youtube_api_key: None,
            search_api_key: None,
            cors_origins: vec![],
            port: 0,
        };
        let search = SearchClient::new(&config);

        Some(TestDb {
            state: AppState {
                pool,
                config: Arc::new(config),
                search,
            },
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.state.pool
    }
}

/// Remove all rows while preserving the schema
async fn cleanup(pool: &PgPool) {
    sqlx::query(
        "TRUNCATE TABLE group_resources, group_members, user_interests, \
         search_history, doubts, groups, topics, users RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await
    .expect("failed to clean up test data");
}

/// Register a user through the signup handler and return the auth response
pub async fn signup_user(state: &AppState, name: &str, email: &str) -> AuthResponse {
    let request = SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
    };

    let response = learnconnect::auth::handlers::signup(
        axum::extract::State(state.clone()),
        axum::Json(request),
    )
    .await
    .expect("signup failed");

    response.0
}

/// Build the `AuthUser` extractor value for a registered user
pub fn auth_user(auth: &AuthResponse) -> AuthUser {
    AuthUser(AuthenticatedUser {
        user_id: auth.user.id,
        email: auth.user.email.clone(),
    })
}

/// Create a topic row directly, returning its id
pub async fn create_topic(pool: &PgPool, name: &str) -> i64 {
    learnconnect::topics::db::find_or_create_topic(pool, name)
        .await
        .expect("failed to create topic")
        .id
}
