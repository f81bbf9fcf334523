/**
 * Application State Management
 *
 * Defines the application state structure and the `FromRef` implementations
 * used by Axum state extraction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract specific parts of
 * the state without needing the entire `AppState`. Handlers that only touch
 * the database take `State<PgPool>`; handlers that also need configuration
 * or the search adapters take `State<AppState>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::search::external::SearchClient;
use crate::server::config::AppConfig;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `pool` - PostgreSQL connection pool; one pooled connection is used per
///   request and released on every exit path
/// * `config` - process-wide configuration loaded once at startup
/// * `search` - external search adapters (video and article)
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Process-wide configuration
    pub config: Arc<AppConfig>,
    /// External search adapters
    pub search: SearchClient,
}

/// Allow handlers to extract the database pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
