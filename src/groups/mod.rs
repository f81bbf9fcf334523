//! Groups Module
//!
//! Study groups: creation, membership, and shared resources.
//!
//! # Invariants
//!
//! - A group always references an existing topic at creation time
//! - Creating a group auto-enrolls the creator as a member (one transaction)
//! - Joining twice and leaving while not a member are rejected
//! - Only members may share resources into a group
//! - Groups and resources are immutable once created

/// Group and resource database operations
pub mod db;

/// HTTP handlers for group endpoints
pub mod handlers;

pub use db::{Group, GroupResource};
pub use handlers::{
    add_resource, create_group, get_group, join_group, leave_group, list_groups, list_resources,
};
