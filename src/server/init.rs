/**
 * Server Initialization
 *
 * Handles the setup of the Axum HTTP server: database pool creation,
 * migrations, state construction, and route configuration.
 *
 * # Error Handling
 *
 * A missing or unreachable database is fatal: every operation in the API
 * writes or reads the relational store, so there is nothing useful to serve
 * without it. Migration failures are logged but do not prevent startup,
 * since migrations may already have been applied out of band.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::routes::router::create_router;
use crate::search::external::SearchClient;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - configuration loaded once at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database connection pool cannot be created.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing LearnConnect backend server");

    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    let search = SearchClient::new(&config);

    let app_state = AppState {
        pool,
        config: Arc::new(config),
        search,
    };

    Ok(create_router(app_state))
}
