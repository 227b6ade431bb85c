//! # Directory Lookup Service
//!
//! Implements the "which groups is this account in" use case.
//!
//! The service opens one [`DirectorySession`] per lookup, asks it for the account and its
//! authorization groups, and turns the raw [`GroupRecord`]s into a sorted list of names.
//! How the directory is reached is left to the [`DirectoryGateway`] implementation.

use std::collections::HashSet;
use std::time::Duration;

use adgroups_common::directory::{DirectoryGateway, DirectorySession, GroupRecord};
use adgroups_common::error::{DirectoryError, LookupError};
use adgroups_common::lookup::LookupResult;
use tracing::{debug, info, warn};

pub struct DirectoryLookupService {
    gateway: Box<dyn DirectoryGateway>,
    timeout: Option<Duration>,
}

impl DirectoryLookupService {
    pub fn new(gateway: Box<dyn DirectoryGateway>) -> Self {
        Self {
            gateway,
            timeout: None,
        }
    }

    /// Bounds every lookup by `timeout`. `None` waits as long as the directory takes.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout.filter(|t| !t.is_zero());
        self
    }

    /// Looks up the authorization groups of `account_name`.
    ///
    /// The caller is expected to pass a trimmed, non-empty name. The timeout covers opening the
    /// session as well as the query. A session that was opened is closed before returning, on
    /// every path.
    pub async fn lookup(&self, account_name: &str) -> Result<LookupResult, LookupError> {
        let mut opened: Option<Box<dyn DirectorySession>> = None;
        let work = open_and_query(self.gateway.as_ref(), &mut opened, account_name);

        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, work)
                .await
                .unwrap_or_else(|_| {
                    Err(DirectoryError::Timeout {
                        seconds: limit.as_secs(),
                    })
                }),
            None => work.await,
        };

        if let Some(session) = opened {
            if let Err(e) = session.close().await {
                warn!("failed to close directory session: {e}");
            } else {
                debug!("directory session closed");
            }
        }

        let result = outcome?;
        if result.found {
            info!(
                "resolved {} groups for '{}'",
                result.group_count(),
                result.username
            );
        } else {
            info!("account '{account_name}' does not exist");
        }
        Ok(result)
    }
}

/// Opens a session into `opened`, so the caller can close it even when this future is dropped.
async fn open_and_query(
    gateway: &dyn DirectoryGateway,
    opened: &mut Option<Box<dyn DirectorySession>>,
    account_name: &str,
) -> Result<LookupResult, DirectoryError> {
    let session = opened.insert(gateway.open().await?);
    debug!("directory session opened for '{account_name}'");
    query(session.as_mut(), account_name).await
}

async fn query(
    session: &mut dyn DirectorySession,
    account_name: &str,
) -> Result<LookupResult, DirectoryError> {
    let Some(user) = session.find_user(account_name).await? else {
        return Ok(LookupResult::not_found(account_name));
    };
    debug!("resolved account to {}", user.distinguished_name);

    let records = session.authorization_groups(&user).await?;
    debug!("directory returned {} group entries", records.len());

    Ok(LookupResult::found(account_name, resolve_group_names(records)))
}

/// Collapses duplicate entries, resolves each record's label and sorts ascending.
///
/// Ordering is Rust's default `str` ordering (ordinal, not locale-aware).
/// Records without any usable name are dropped.
pub fn resolve_group_names(records: Vec<GroupRecord>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names: Vec<String> = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        if let Some(identity) = record.identity() {
            if !seen.insert(identity) {
                continue;
            }
        }

        match record.resolved_name() {
            Some(name) => names.push(name.to_string()),
            None => warn!("dropping group entry #{idx}: it has no usable name"),
        }
    }

    names.sort();
    names
}
