//! Doubts Module
//!
//! Free-form questions posted by users. A doubt carries a free-text topic
//! string (deliberately not a foreign key to the topics table), a title,
//! and a description, and is immutable once posted.

/// Doubt database operations
pub mod db;

/// HTTP handlers for doubt endpoints
pub mod handlers;

pub use db::Doubt;
pub use handlers::{create_doubt, list_doubts};
