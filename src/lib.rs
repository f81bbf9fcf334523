//! LearnConnect Backend
//!
//! Server-side code for the LearnConnect collaborative learning platform.
//! Users sign up, search topics, join study groups, share resources, and
//! post doubts. The backend is an Axum HTTP server over a PostgreSQL
//! schema, with two outbound search integrations (videos and articles).
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`error`** - API error taxonomy and HTTP response mapping
//! - **`auth`** - Password hashing, JWT tokens, user management
//! - **`middleware`** - Bearer-token authentication extractor
//! - **`topics`** - Topic rows and user interests
//! - **`groups`** - Study groups, membership, shared resources
//! - **`search`** - Topic search, history, external search adapters
//! - **`dashboard`** - Per-user dashboard aggregation
//! - **`doubts`** - Free-form questions posted by users
//!
//! # Request Flow
//!
//! An inbound request is authenticated (bearer token -> user) by the
//! `AuthUser` extractor, dispatched to a handler, which reads/writes the relational
//! schema under the domain invariants and optionally consults the external
//! search adapters. One logical unit of work per request; the database's
//! transactional guarantees are the only concurrency control.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// API error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Topics and user interests
pub mod topics;

/// Study groups, membership, and shared resources
pub mod groups;

/// Topic search and external search adapters
pub mod search;

/// Dashboard aggregation
pub mod dashboard;

/// Doubt posting and listing
pub mod doubts;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
