//! Search Module
//!
//! Topic search: records search history, lazily creates Topic rows
//! (find-or-create by name), and fans out to the external video and
//! article search adapters.
//!
//! # Degradation
//!
//! External search failures never surface to the caller. With no API
//! credential configured the adapters return labeled placeholder results
//! without touching the network; with a credential, any failure (network,
//! non-2xx, malformed payload) is logged and degrades to an empty list.

/// Search history database operations
pub mod db;

/// External video and article search adapters
pub mod external;

/// HTTP handler for topic search
pub mod handlers;

pub use external::{ArticleResult, SearchClient, VideoResult};
pub use handlers::search_topic;
