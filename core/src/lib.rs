//! # adgroups-core
//!
//! Application services of `adgroups`.
//!
//! * [`lookup::DirectoryLookupService`]: queries a directory for an account's groups.
//! * [`session::SessionState`]: remembers the latest successful lookup.
//! * [`export::ReportExporter`]: writes a lookup as a text report.
//! * [`commands`]: `perform_lookup` / `perform_export`, the entry points front-ends call.

pub mod commands;
pub mod export;
pub mod lookup;
pub mod session;
pub mod status;
