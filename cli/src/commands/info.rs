use colored::*;

use crate::commands::DirectoryArgs;
use crate::terminal::{colors, print::{self, GLOBAL_KEY_WIDTH}};

pub fn info(directory: &DirectoryArgs, q_level: u8) {
    print::println(
        &"adgroups lists the Active Directory groups a user account is authorized for."
            .color(colors::TEXT_DEFAULT)
            .to_string(),
    );
    print::println("");
    GLOBAL_KEY_WIDTH.set(12);

    print_about_the_tool();
    print_directory(directory, q_level);
}

fn print_about_the_tool() {
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Report", "<username>_AD_Groups.txt");
}

fn print_directory(directory: &DirectoryArgs, q_level: u8) {
    print::header("directory", q_level);

    let cfg = match directory.to_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            print::aligned_line("Status", "not configured".red().bold());
            print::print_status(e.to_string());
            return;
        }
    };

    print::aligned_line("URL", cfg.url.as_str());
    print::aligned_line("Base DN", cfg.base_dn.as_str());
    print::aligned_line("Bind as", cfg.bind_identity());
    print::aligned_line(
        "Password",
        match (&cfg.bind_dn, std::env::var_os(&directory.password_env)) {
            (None, _) => "not needed".normal(),
            (Some(_), Some(_)) => format!("from ${}", directory.password_env).green(),
            (Some(_), None) => "prompted".yellow(),
        },
    );
    print::aligned_line("StartTLS", if cfg.starttls { "yes" } else { "no" });
    print::aligned_line("Strategy", cfg.strategy.to_string());
    print::aligned_line(
        "Timeout",
        match cfg.timeout {
            Some(timeout) => format!("{}s", timeout.as_secs()),
            None => "none".to_string(),
        },
    );
}
