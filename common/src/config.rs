//! # Runtime Configuration
//!
//! Settings assembled from command-line flags. There is no configuration file.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::DirectoryError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Presentation settings.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the banner.
    pub no_banner: bool,
    /// `1` hides banner and headers, `2` also hides the group list.
    pub quiet: u8,
    /// Overwrites existing report files without asking.
    pub force: bool,
}

/// How the transitive group set of an account is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MembershipStrategy {
    /// Reads the constructed `tokenGroups` attribute, including the primary group.
    #[default]
    TokenGroups,
    /// Uses the `LDAP_MATCHING_RULE_IN_CHAIN` extensible match on `member`. The primary group
    /// is looked up separately from `primaryGroupID`.
    InChain,
}

impl FromStr for MembershipStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "token-groups" | "tokengroups" => Ok(Self::TokenGroups),
            "in-chain" | "inchain" => Ok(Self::InChain),
            _ => Err(format!("invalid strategy: {s} (expected 'token-groups' or 'in-chain')")),
        }
    }
}

impl fmt::Display for MembershipStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenGroups => f.write_str("token-groups"),
            Self::InChain => f.write_str("in-chain"),
        }
    }
}

/// Where and how to reach the directory.
#[derive(Clone)]
pub struct DirectoryConfig {
    pub url: String,
    pub base_dn: String,
    /// `None` binds anonymously.
    pub bind_dn: Option<String>,
    pub bind_password: Option<String>,
    pub starttls: bool,
    pub strategy: MembershipStrategy,
    /// Upper bound for one lookup. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl DirectoryConfig {
    /// Combines an optional DNS domain with explicit overrides.
    ///
    /// Explicit `url` and `base_dn` win over values derived from `domain`.
    pub fn resolve(
        domain: Option<&str>,
        url: Option<String>,
        base_dn: Option<String>,
    ) -> Result<Self, DirectoryError> {
        let domain = domain.map(str::trim).filter(|d| !d.is_empty());

        let url = match (url, domain) {
            (Some(url), _) => url,
            (None, Some(domain)) => domain_to_url(domain),
            (None, None) => {
                return Err(DirectoryError::Config(
                    "no directory given: pass --domain or --url".to_string(),
                ));
            }
        };

        let base_dn = match (base_dn, domain) {
            (Some(base_dn), _) => base_dn,
            (None, Some(domain)) => domain_to_base_dn(domain)?,
            (None, None) => {
                return Err(DirectoryError::Config(
                    "no search base given: pass --domain or --base-dn".to_string(),
                ));
            }
        };

        if !(url.starts_with("ldap://") || url.starts_with("ldaps://")) {
            return Err(DirectoryError::Config(format!(
                "unsupported URL scheme in '{url}' (expected ldap:// or ldaps://)"
            )));
        }

        Ok(Self {
            url,
            base_dn,
            bind_dn: None,
            bind_password: None,
            starttls: false,
            strategy: MembershipStrategy::default(),
            timeout: Some(DEFAULT_TIMEOUT),
        })
    }

    pub fn bind_identity(&self) -> &str {
        self.bind_dn.as_deref().unwrap_or("<anonymous>")
    }
}

impl fmt::Debug for DirectoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryConfig")
            .field("url", &self.url)
            .field("base_dn", &self.base_dn)
            .field("bind_dn", &self.bind_dn)
            .field("bind_password", &self.bind_password.as_ref().map(|_| "<redacted>"))
            .field("starttls", &self.starttls)
            .field("strategy", &self.strategy)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `corp.example.com` -> `ldap://corp.example.com`
pub fn domain_to_url(domain: &str) -> String {
    format!("ldap://{}", domain.trim_end_matches('.'))
}

/// `corp.example.com` -> `DC=corp,DC=example,DC=com`
pub fn domain_to_base_dn(domain: &str) -> Result<String, DirectoryError> {
    let labels: Vec<&str> = domain.trim_end_matches('.').split('.').collect();

    if labels.iter().any(|label| label.trim().is_empty()) {
        return Err(DirectoryError::Config(format!("invalid domain name: '{domain}'")));
    }

    Ok(labels
        .iter()
        .map(|label| format!("DC={}", label.trim()))
        .collect::<Vec<String>>()
        .join(","))
}
