//! # Directory Boundary
//!
//! Records a directory service hands back, and the port that abstracts the service itself.
//!
//! High-level code depends on [`DirectoryGateway`] only, so the LDAP backend and the
//! in-memory doubles used by tests are interchangeable.

pub mod gateway;
pub mod group;
pub mod user;

pub use gateway::{DirectoryGateway, DirectorySession};
pub use group::GroupRecord;
pub use user::UserRecord;
