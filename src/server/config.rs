/**
 * Server Configuration
 *
 * Loads all process-wide configuration from the environment exactly once at
 * startup. The resulting `AppConfig` value is passed into the components
 * that need it; nothing in the crate reads environment variables after
 * startup.
 *
 * # Configuration Surface
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - token signing key (defaults to a development value)
 * - `TOKEN_TTL_MINUTES` - bearer token lifetime (default 30)
 * - `YOUTUBE_API_KEY` - optional; video search falls back to placeholders
 * - `SEARCH_API_KEY` - optional; article search falls back to placeholders
 * - `CORS_ORIGINS` - comma-separated allowed origins
 * - `SERVER_PORT` - listen port (default 8000)
 */

use thiserror::Error;

/// Default signing secret for local development only.
const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Default allowed origins for local frontend development.
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:3000"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable could not be parsed
    #[error("invalid value for {name}: {value}")]
    InvalidVar {
        /// Variable name
        name: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Process-wide configuration, loaded once at startup
///
/// Modeled as an explicitly constructed value injected into components at
/// construction time rather than as ambient global state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Secret key for signing bearer tokens
    pub jwt_secret: String,
    /// Bearer token lifetime in minutes
    pub token_ttl_minutes: i64,
    /// Optional YouTube Data API credential; `None` enables placeholder mode
    pub youtube_api_key: Option<String>,
    /// Optional web search API credential; `None` enables placeholder mode
    pub search_api_key: Option<String>,
    /// Allowed cross-origin hosts
    pub cors_origins: Vec<String>,
    /// HTTP listen port
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails if `DATABASE_URL` is absent or if a numeric variable cannot be
    /// parsed. Optional credentials are treated as absent when empty, which
    /// switches the corresponding search adapter to placeholder results.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            DEV_JWT_SECRET.to_string()
        });

        let token_ttl_minutes = match std::env::var("TOKEN_TTL_MINUTES") {
            Ok(raw) => raw.parse::<i64>().map_err(|_| ConfigError::InvalidVar {
                name: "TOKEN_TTL_MINUTES",
                value: raw,
            })?,
            Err(_) => 30,
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => 8000,
        };

        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|raw| parse_cors_origins(&raw))
            .unwrap_or_else(|_| default_cors_origins());

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_minutes,
            youtube_api_key: optional_var("YOUTUBE_API_KEY"),
            search_api_key: optional_var("SEARCH_API_KEY"),
            cors_origins,
            port,
        })
    }
}

/// Read an optional variable, treating empty strings as absent
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a comma-separated origin list, dropping empty entries
fn parse_cors_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        default_cors_origins()
    } else {
        origins
    }
}

fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cors_origins() {
        let origins = parse_cors_origins("http://a.example, http://b.example");
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn test_parse_cors_origins_empty_falls_back() {
        let origins = parse_cors_origins(" , ");
        assert_eq!(origins, default_cors_origins());
    }

    #[test]
    fn test_default_origins_cover_local_frontends() {
        let origins = default_cors_origins();
        assert!(origins.contains(&"http://localhost:5173".to_string()));
        assert!(origins.contains(&"http://localhost:3000".to_string()));
    }
}
