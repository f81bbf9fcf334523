/**
 * API Error Types
 *
 * This module defines the error type used by all HTTP handlers and its
 * conversion into HTTP responses.
 *
 * # Error Categories
 *
 * ## Business-rule rejections
 *
 * Validation failures, duplicate emails, membership guards, and missing
 * rows. Each carries a stable machine-readable reason string and maps to a
 * 4xx status. These are never retried.
 *
 * ## Internal errors
 *
 * Database connectivity, password hashing, and token signing failures.
 * These are fatal to the request, map to 500, and surface only a generic
 * message; the detail is logged server-side.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// API error taxonomy
///
/// Each variant corresponds to one rejection reason the API can return.
/// External search failures are deliberately absent: the search adapters
/// absorb them and degrade to empty result lists.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input (bad email format, short password, empty fields)
    #[error("{0}")]
    Validation(String),

    /// Signup with an email that is already registered
    #[error("Email already registered")]
    DuplicateEmail,

    /// Login failure; identical for unknown email and wrong password so the
    /// response never reveals which emails exist
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer token was presented
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The bearer token is malformed, badly signed, or expired
    #[error("Invalid token")]
    InvalidToken,

    /// The token subject no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Group creation referenced a nonexistent topic
    #[error("Topic not found")]
    TopicNotFound,

    /// The requested group does not exist
    #[error("Group not found")]
    GroupNotFound,

    /// Join requested by a user who is already a member
    #[error("Already a member of this group")]
    AlreadyMember,

    /// Leave requested by a user who is not a member
    #[error("Not a member of this group")]
    NotMember,

    /// The actor lacks membership required for this operation
    #[error("Only group members can add resources")]
    Forbidden,

    /// Database failure; fatal to the request, no partial commits
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing failure during issuance
    #[error("Token creation error")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

/// JSON body returned for every rejection
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable reason code
    pub error: &'static str,
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateEmail | Self::AlreadyMember | Self::NotMember => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials | Self::NotAuthenticated | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::TopicNotFound | Self::GroupNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::PasswordHash(_) | Self::TokenCreation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the stable reason code for this error
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::DuplicateEmail => "duplicate_email",
            Self::InvalidCredentials => "invalid_credentials",
            Self::NotAuthenticated => "not_authenticated",
            Self::InvalidToken => "invalid_token",
            Self::UserNotFound => "user_not_found",
            Self::TopicNotFound => "topic_not_found",
            Self::GroupNotFound => "group_not_found",
            Self::AlreadyMember => "already_member",
            Self::NotMember => "not_member",
            Self::Forbidden => "forbidden",
            Self::Database(_) | Self::PasswordHash(_) | Self::TokenCreation(_) => "internal_error",
        }
    }

    /// Whether this error is internal (detail must not leave the process)
    fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::PasswordHash(_) | Self::TokenCreation(_)
        )
    }
}

/// Postgres SQLSTATE for a unique-constraint violation
const UNIQUE_VIOLATION: &str = "23505";

/// Whether a database error is a unique-constraint violation
///
/// The duplicate-email and membership guards are check-then-insert; a
/// concurrent writer can slip between the check and the insert, in which
/// case the unique constraint fires. Callers map that back to the same
/// domain rejection the check would have produced.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if self.is_internal() {
            tracing::error!("Internal error serving request: {:?}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Request rejected: {}", self);
            self.to_string()
        };

        let body = ErrorBody {
            error: self.reason(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DuplicateEmail.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotAuthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::GroupNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::TopicNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::AlreadyMember.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotMember.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(ApiError::DuplicateEmail.reason(), "duplicate_email");
        assert_eq!(ApiError::InvalidCredentials.reason(), "invalid_credentials");
        assert_eq!(ApiError::AlreadyMember.reason(), "already_member");
        assert_eq!(ApiError::NotMember.reason(), "not_member");
        assert_eq!(ApiError::Forbidden.reason(), "forbidden");
    }

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.reason(), "internal_error");
    }

    #[test]
    fn test_credential_errors_share_one_message() {
        // Unknown email and wrong password must be indistinguishable.
        let a = ApiError::InvalidCredentials.to_string();
        let b = ApiError::InvalidCredentials.to_string();
        assert_eq!(a, b);
        assert_eq!(a, "Invalid email or password");
    }
}
