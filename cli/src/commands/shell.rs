use std::path::PathBuf;

use adgroups_common::config::{Config, DirectoryConfig};
use adgroups_common::error::LookupError;
use adgroups_core::commands::LookupOutcome;
use adgroups_core::session::SessionState;

use crate::commands::{build_service, flow};
use crate::terminal::{print, prompt};

const EXIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Interactive loop: one lookup per prompt, with an offer to save after each hit.
///
/// Ends on `quit`, `exit` or end of input.
pub async fn shell(directory: DirectoryConfig, cfg: &Config) -> anyhow::Result<()> {
    let service = build_service(directory);
    let mut session = SessionState::new();

    print::print_status("Type a username to look it up, 'quit' to leave.");

    loop {
        let Some(input) = prompt::input("Username")? else {
            break;
        };
        if EXIT_WORDS.contains(&input.trim().to_ascii_lowercase().as_str()) {
            break;
        }

        print::header("group membership", cfg.quiet);
        match flow::lookup(&service, &mut session, &input, cfg).await {
            Ok(LookupOutcome::Found { .. }) => offer_save(&session, cfg)?,
            Ok(LookupOutcome::NotFound { .. }) => {}
            Err(LookupError::EmptyInput) | Err(LookupError::Directory(_)) => {}
        }
        print::println("");
    }

    Ok(())
}

/// Asks for a destination until the report is written or the user gives up.
fn offer_save(session: &SessionState, cfg: &Config) -> anyhow::Result<()> {
    if !session.can_export() {
        return Ok(());
    }

    while prompt::confirm("Save these groups to a file?", false)? {
        let suggested: PathBuf = flow::suggested_path(session).unwrap_or_default();
        let Some(answer) = prompt::input_with_default("Save as", &suggested.display().to_string())?
        else {
            return Ok(());
        };

        match flow::save(session, &PathBuf::from(answer), cfg) {
            Ok(Some(_)) => return Ok(()),
            // Declined overwrite or failed write: the result is still held, offer again.
            Ok(None) | Err(_) => continue,
        }
    }

    Ok(())
}
