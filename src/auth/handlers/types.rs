/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, login, and me handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Email address (must be unique)
    pub email: String,
    /// Raw password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Raw password (verified against the stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login. Contains the bearer token and the user
/// profile for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,
    /// User profile (without sensitive data)
    pub user: UserResponse,
}

/// User profile response (without sensitive data)
///
/// Never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// Unique numeric user id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Optional profile picture reference
    pub profile_picture: Option<String>,
    /// Optional bio
    pub bio: Option<String>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            profile_picture: user.profile_picture,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}
