//! # adgroups-ldap
//!
//! Active Directory backend for the [`adgroups_common::directory::DirectoryGateway`] port,
//! speaking LDAP through `ldap3`.

mod entry;
pub mod filter;
mod gateway;
pub mod sid;

pub use gateway::{LdapGateway, LdapSession};
