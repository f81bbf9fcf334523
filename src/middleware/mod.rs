//! Middleware Module
//!
//! Request-processing middleware. Currently holds the bearer-token
//! `AuthUser` extractor that protects authenticated routes.

/// Bearer-token authentication extractor
pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser};
