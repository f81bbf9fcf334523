//! API Error Types
//!
//! Defines the error taxonomy for the HTTP API. Every business-rule
//! violation is recovered at the handler boundary and turned into a
//! structured rejection with a stable reason code and an HTTP status
//! category. Internal failures (database, hashing, token signing) map to a
//! generic 500 response; their detail is logged, never exposed.

/// Error type definitions and HTTP mapping
pub mod types;

pub use types::{is_unique_violation, ApiError, ErrorBody};
