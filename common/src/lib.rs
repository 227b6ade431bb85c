//! # adgroups-common
//!
//! Shared vocabulary for the `adgroups` workspace.
//!
//! * **[`directory`]**: records returned by a directory service and the [`directory::DirectoryGateway`]
//!   port that concrete backends (LDAP, test doubles) implement.
//! * **[`lookup`]**: the [`lookup::LookupResult`] value produced by a membership query.
//! * **[`error`]**: the error taxonomy shared by every layer.
//! * **[`config`]**: runtime settings assembled by the CLI.

pub mod config;
pub mod directory;
pub mod error;
pub mod lookup;
