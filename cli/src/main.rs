mod commands;
mod terminal;

use std::process::ExitCode;

use commands::check::CheckRequest;
use commands::{CommandLine, Commands, check, info, shell};
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let outcome: anyhow::Result<ExitCode> = match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&commands.directory, cfg.quiet);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            account,
            save,
            stdout,
            ..
        } => match commands.directory.to_config_with_credentials() {
            Ok(directory) => {
                let request = CheckRequest {
                    account,
                    save,
                    stdout,
                };
                check::check(request, directory, &cfg).await
            }
            Err(e) => Err(e),
        },
        Commands::Shell { .. } => match commands.directory.to_config_with_credentials() {
            Ok(directory) => {
                print::header("interactive session", cfg.quiet);
                shell::shell(directory, &cfg).await.map(|_| ExitCode::SUCCESS)
            }
            Err(e) => Err(e),
        },
    };

    print::end_of_program(cfg.quiet);

    match outcome {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
