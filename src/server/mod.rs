//! Server Module
//!
//! Contains the code for initializing and configuring the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - Configuration loading (AppConfig)
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env()` reads everything
//!    once at startup; components receive the config by value, never via
//!    ambient globals.
//! 2. **Database Connection**: a `PgPool` is created and migrations run.
//! 3. **Router Creation**: all routes and middleware are configured.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
