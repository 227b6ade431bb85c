use std::path::PathBuf;
use std::process::ExitCode;

use adgroups_common::config::{Config, DirectoryConfig};
use adgroups_core::commands::LookupOutcome;
use adgroups_core::export::ReportExporter;
use adgroups_core::session::SessionState;
use chrono::Local;

use crate::commands::{build_service, flow};
use crate::terminal::print;

pub struct CheckRequest {
    pub account: String,
    pub save: Option<Option<PathBuf>>,
    pub stdout: bool,
}

pub async fn check(
    request: CheckRequest,
    directory: DirectoryConfig,
    cfg: &Config,
) -> anyhow::Result<ExitCode> {
    print::header("group membership", cfg.quiet);

    let service = build_service(directory);
    let mut session = SessionState::new();

    // The report replaces the group list on --stdout.
    let list_cfg = Config {
        quiet: if request.stdout { 2 } else { cfg.quiet },
        ..cfg.clone()
    };

    let Ok(outcome) = flow::lookup(&service, &mut session, &request.account, &list_cfg).await
    else {
        return Ok(ExitCode::FAILURE);
    };

    if request.stdout && matches!(outcome, LookupOutcome::Found { .. }) {
        if let Some(result) = session.current().filter(|r| r.has_groups()) {
            let report = ReportExporter::render(result, Local::now().naive_local())?;
            print::raw_block(&report);
        }
    }

    let Some(save) = request.save else {
        return Ok(ExitCode::SUCCESS);
    };

    if !session.can_export() {
        // Not-found or no groups: nothing to write, but the lookup itself succeeded.
        print::print_status("No groups to save.");
        return Ok(ExitCode::SUCCESS);
    }

    let destination = match save.or_else(|| flow::suggested_path(&session)) {
        Some(path) => path,
        None => return Ok(ExitCode::SUCCESS),
    };

    match flow::save(&session, &destination, cfg) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
