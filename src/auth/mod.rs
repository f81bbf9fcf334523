//! Authentication Module
//!
//! Handles user registration, login, and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── passwords.rs    - bcrypt hashing and verification
//! ├── sessions.rs     - JWT token issuance and verification
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name/email/password -> duplicate-email check -> user
//!    created -> token returned
//! 2. **Login**: email/password -> credentials verified -> token returned
//! 3. **Me**: bearer token -> token verified -> user profile returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Tokens are signed HS256 JWTs carrying the user id and an expiry
//! - Unknown email and wrong password produce the identical rejection

/// Password hashing and verification
pub mod passwords;

/// JWT token issuance and verification
pub mod sessions;

/// User data model and database operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, login, signup};
