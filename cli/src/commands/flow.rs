//! Lookup and save steps shared by `check` and `shell`.
//!
//! Each step reports its own outcome (status line, plus an error event on failure),
//! so callers only decide what happens next.

use std::path::{Path, PathBuf};

use adgroups_common::config::Config;
use adgroups_common::error::{ExportError, LookupError};
use adgroups_core::commands::{self, LookupOutcome};
use adgroups_core::export::ReportExporter;
use adgroups_core::lookup::DirectoryLookupService;
use adgroups_core::session::SessionState;
use adgroups_core::status::Status;
use chrono::Local;
use tracing::{error, warn};

use crate::terminal::{format, print, prompt, spinner};

pub async fn lookup(
    service: &DirectoryLookupService,
    session: &mut SessionState,
    input: &str,
    cfg: &Config,
) -> Result<LookupOutcome, LookupError> {
    let outcome = {
        let _spinner = spinner::start(Status::Querying.to_string());
        commands::perform_lookup(service, session, input).await
    };

    match &outcome {
        Ok(found @ LookupOutcome::Found { .. }) => {
            if let Some(result) = session.current() {
                format::group_list(result, cfg);
            }
            print::print_status(found.status().to_string());
        }
        Ok(not_found @ LookupOutcome::NotFound { .. }) => {
            print::print_status(not_found.status().to_string());
        }
        Err(LookupError::EmptyInput) => {
            warn!("Please enter a username.");
        }
        Err(e) => {
            print::print_status(Status::Error(e.to_string()).to_string());
            error!("Error querying Active Directory: {e}");
        }
    }

    outcome
}

/// Writes the session's report to `destination`.
///
/// Returns `Ok(None)` when the user declined to overwrite an existing file.
pub fn save(
    session: &SessionState,
    destination: &Path,
    cfg: &Config,
) -> anyhow::Result<Option<PathBuf>> {
    if !session.can_export() {
        warn!("No groups to save.");
        return Err(ExportError::NoData.into());
    }

    let destination = with_default_extension(destination);
    if destination.exists() && !cfg.force {
        let question = format!("{} already exists. Replace it?", destination.display());
        if !prompt::confirm(&question, false)? {
            print::print_status("Save cancelled.");
            return Ok(None);
        }
    }

    match commands::perform_export(session, &destination, Local::now().naive_local()) {
        Ok(path) => {
            print::print_status(Status::Saved(path.clone()).to_string());
            Ok(Some(path))
        }
        Err(e) => {
            error!("{e}");
            Err(e.into())
        }
    }
}

/// Suggested report path for the session's current user.
pub fn suggested_path(session: &SessionState) -> Option<PathBuf> {
    session
        .current()
        .map(|result| PathBuf::from(ReportExporter::suggested_file_name(&result.username)))
}

/// Appends `.txt` when the path has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("txt")
    }
}
