//! Topics Module
//!
//! Topic rows (named search subjects shared across groups and user
//! interests) and the user-interest join table. Topics are created lazily
//! on first search of a new name; there is no explicit create endpoint.

/// Topic model and database operations
pub mod db;

pub use db::Topic;
