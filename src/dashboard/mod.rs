//! Dashboard Module
//!
//! Per-user dashboard aggregation: recent searches, joined groups, and a
//! small set of recommended topics.

/// HTTP handler for the dashboard endpoint
pub mod handlers;

pub use handlers::get_dashboard;
