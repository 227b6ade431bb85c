pub mod check;
pub mod flow;
pub mod info;
pub mod shell;

use std::path::PathBuf;
use std::time::Duration;

use adgroups_common::config::{Config, DirectoryConfig, MembershipStrategy};
use adgroups_core::lookup::DirectoryLookupService;
use adgroups_ldap::LdapGateway;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::terminal::prompt;

pub const DEFAULT_PASSWORD_ENV: &str = "ADGROUPS_BIND_PASSWORD";

#[derive(Parser)]
#[command(name = "adgroups")]
#[command(version, about = "Look up the Active Directory groups of a user account.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub directory: DirectoryArgs,

    /// Less output: once hides banner and headers, twice also hides the group list
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one account and optionally save the report
    #[command(alias = "c")]
    Check {
        /// Short logon name (sAMAccountName)
        account: String,
        /// Save the report; without a value uses <account>_AD_Groups.txt
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
        /// Overwrite an existing report without asking
        #[arg(long)]
        force: bool,
        /// Print the report text instead of the group list
        #[arg(long)]
        stdout: bool,
    },
    /// Interactive session: look up accounts one after another
    #[command(alias = "s")]
    Shell {
        /// Overwrite existing reports without asking
        #[arg(long)]
        force: bool,
    },
    /// Show the tool and directory configuration
    #[command(alias = "i")]
    Info,
}

#[derive(Args, Debug)]
pub struct DirectoryArgs {
    /// DNS name of the AD domain; derives URL and search base
    #[arg(long, global = true, env = "USERDNSDOMAIN")]
    pub domain: Option<String>,

    /// LDAP URL (ldap:// or ldaps://), overrides the one derived from --domain
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Search base, overrides the one derived from --domain
    #[arg(long, global = true)]
    pub base_dn: Option<String>,

    /// Identity to bind as; anonymous bind when omitted
    #[arg(long, global = true)]
    pub bind_dn: Option<String>,

    /// Environment variable holding the bind password
    #[arg(long, global = true, value_name = "VAR", default_value = DEFAULT_PASSWORD_ENV)]
    pub password_env: String,

    /// Upgrade an ldap:// connection with StartTLS
    #[arg(long, global = true)]
    pub starttls: bool,

    /// How nested memberships are resolved: token-groups or in-chain
    #[arg(long, global = true, default_value_t = MembershipStrategy::TokenGroups)]
    pub strategy: MembershipStrategy,

    /// Seconds to wait for the directory, 0 waits indefinitely
    #[arg(long, global = true, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let force = match self.command {
            Commands::Check { force, .. } | Commands::Shell { force } => force,
            Commands::Info => false,
        };

        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            force,
        }
    }
}

impl DirectoryArgs {
    /// Resolves the connection settings. Does not touch the password.
    pub fn to_config(&self) -> anyhow::Result<DirectoryConfig> {
        let mut cfg = DirectoryConfig::resolve(
            self.domain.as_deref(),
            self.url.clone(),
            self.base_dn.clone(),
        )?;

        cfg.bind_dn = self.bind_dn.clone().filter(|dn| !dn.trim().is_empty());
        cfg.starttls = self.starttls;
        cfg.strategy = self.strategy;
        cfg.timeout = Some(Duration::from_secs(self.timeout)).filter(|t| !t.is_zero());
        Ok(cfg)
    }

    /// Full settings including the bind password, prompting for it when needed.
    pub fn to_config_with_credentials(&self) -> anyhow::Result<DirectoryConfig> {
        let mut cfg = self.to_config()?;
        if let Some(bind_dn) = &cfg.bind_dn {
            cfg.bind_password = match std::env::var(&self.password_env) {
                Ok(password) => Some(password),
                Err(_) => Some(prompt::password(bind_dn)?),
            };
        }
        Ok(cfg)
    }
}

/// Wires the LDAP adapter into the lookup service.
pub fn build_service(cfg: DirectoryConfig) -> DirectoryLookupService {
    let timeout = cfg.timeout;
    DirectoryLookupService::new(Box::new(LdapGateway::new(cfg))).with_timeout(timeout)
}
