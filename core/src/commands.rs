//! # Commands
//!
//! The two user intents of the tool, as plain functions over explicit state:
//! look an account up, then save what was found.
//!
//! Front-ends (the CLI today) call these and only render the returned values.

use std::path::{Path, PathBuf};

use adgroups_common::error::{ExportError, LookupError};
use chrono::NaiveDateTime;
use tracing::debug;

use crate::export::ReportExporter;
use crate::lookup::DirectoryLookupService;
use crate::session::SessionState;
use crate::status::Status;

/// What a lookup that reached the directory produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found { username: String, group_count: usize },
    NotFound { username: String },
}

impl LookupOutcome {
    pub fn status(&self) -> Status {
        match self {
            LookupOutcome::Found {
                username,
                group_count,
            } => Status::Found {
                count: *group_count,
                username: username.clone(),
            },
            LookupOutcome::NotFound { .. } => Status::NotFound,
        }
    }
}

/// Runs one lookup and records it in `session`.
///
/// Blank input is rejected before anything else happens. Otherwise the session is cleared
/// first, so a not-found answer or a failure leaves nothing exportable behind.
pub async fn perform_lookup(
    service: &DirectoryLookupService,
    session: &mut SessionState,
    raw_input: &str,
) -> Result<LookupOutcome, LookupError> {
    let account_name = raw_input.trim();
    if account_name.is_empty() {
        return Err(LookupError::EmptyInput);
    }

    session.clear();
    let result = service.lookup(account_name).await?;

    if !result.found {
        return Ok(LookupOutcome::NotFound {
            username: result.username,
        });
    }

    let outcome = LookupOutcome::Found {
        username: result.username.clone(),
        group_count: result.group_count(),
    };
    session.record_lookup(result);
    Ok(outcome)
}

/// Writes the session's current result to `destination`.
///
/// The session is left untouched, so a failed write can be retried.
pub fn perform_export(
    session: &SessionState,
    destination: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    let result = match session.current() {
        Some(result) if session.can_export() => result,
        _ => return Err(ExportError::NoData),
    };

    debug!("exporting {} groups for '{}'", result.group_count(), result.username);
    ReportExporter::export(result, destination, now)?;
    Ok(destination.to_path_buf())
}
