/**
 * Router Configuration
 *
 * Assembles the full route table and the CORS layer.
 *
 * # Routes
 *
 * ## Auth
 * - `POST /api/auth/signup` - user registration
 * - `POST /api/auth/login` - user login
 * - `GET /api/auth/me` - current user info
 *
 * ## Groups
 * - `POST /api/groups` - create a group (auth)
 * - `GET /api/groups` - list all groups
 * - `GET /api/groups/{group_id}` - get one group
 * - `POST /api/groups/{group_id}/join` - join a group (auth)
 * - `POST /api/groups/{group_id}/leave` - leave a group (auth)
 * - `POST /api/groups/{group_id}/resources` - share a resource (auth)
 * - `GET /api/groups/{group_id}/resources` - list shared resources
 *
 * ## Search / Dashboard / Doubts
 * - `GET /api/search/{topic}` - topic search (auth)
 * - `GET /api/dashboard` - dashboard aggregate (auth)
 * - `POST /api/doubts` - post a doubt (auth)
 * - `GET /api/doubts` - list doubts
 *
 * ## Misc
 * - `GET /health` - liveness probe
 *
 * Authentication is opt-in per handler through the `AuthUser` extractor;
 * routes whose handlers do not take it are public.
 */

use axum::http::HeaderValue;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::auth::handlers::{get_me, login, signup};
use crate::dashboard::handlers::get_dashboard;
use crate::doubts::handlers::{create_doubt, list_doubts};
use crate::groups::handlers::{
    add_resource, create_group, get_group, join_group, leave_group, list_groups, list_resources,
};
use crate::search::handlers::search_topic;
use crate::server::state::AppState;

/// Liveness response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Build the CORS layer from the configured origin list
///
/// Origins that fail to parse as header values are dropped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring unparseable CORS origin: {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        // Group endpoints
        .route("/api/groups", post(create_group).get(list_groups))
        .route("/api/groups/{group_id}", get(get_group))
        .route("/api/groups/{group_id}/join", post(join_group))
        .route("/api/groups/{group_id}/leave", post(leave_group))
        .route(
            "/api/groups/{group_id}/resources",
            post(add_resource).get(list_resources),
        )
        // Search, dashboard, doubts
        .route("/api/search/{topic}", get(search_topic))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/doubts", post(create_doubt).get(list_doubts))
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_tolerates_bad_origins() {
        // Must not panic; the bad origin is dropped.
        let _ = cors_layer(&["http://localhost:5173".to_string(), "\u{0}".to_string()]);
    }
}
