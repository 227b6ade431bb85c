//! # LDAP Directory Gateway
//!
//! Implements [`DirectoryGateway`] on top of `ldap3`'s async client.
//!
//! Every session owns one connection: the connection driver is spawned on the tokio
//! runtime when the session opens and aborted after the unbind in [`DirectorySession::close`].

use std::time::Duration;

use adgroups_common::config::{DirectoryConfig, MembershipStrategy};
use adgroups_common::directory::{DirectoryGateway, DirectorySession, GroupRecord, UserRecord};
use adgroups_common::error::DirectoryError;
use async_trait::async_trait;
use ldap3::{Ldap, LdapConnAsync, LdapConnSettings, Scope, SearchEntry};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::entry;
use crate::filter;
use crate::sid;

/// Maximum number of SIDs resolved by one search.
const SID_BATCH: usize = 64;

const GROUP_ATTRS: [&str; 5] = [
    "displayName",
    "cn",
    "sAMAccountName",
    "distinguishedName",
    "objectSid",
];
const USER_ATTRS: [&str; 4] = [
    "distinguishedName",
    "sAMAccountName",
    "objectSid",
    "primaryGroupID",
];

pub struct LdapGateway {
    config: DirectoryConfig,
}

impl LdapGateway {
    pub fn new(config: DirectoryConfig) -> Self {
        Self { config }
    }

    fn settings(&self) -> LdapConnSettings {
        let mut settings = LdapConnSettings::new().set_starttls(self.config.starttls);
        if let Some(timeout) = self.config.timeout.filter(|t| !t.is_zero()) {
            settings = settings.set_conn_timeout(timeout);
        }
        settings
    }
}

#[async_trait]
impl DirectoryGateway for LdapGateway {
    async fn open(&self) -> Result<Box<dyn DirectorySession>, DirectoryError> {
        let url = self.config.url.as_str();
        debug!("connecting to {url}");

        let (conn, mut ldap) = LdapConnAsync::with_settings(self.settings(), url)
            .await
            .map_err(|e| DirectoryError::Connect {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let driver = tokio::spawn(async move {
            if let Err(e) = conn.drive().await {
                warn!("LDAP connection error: {e}");
            }
        });

        let identity = self.config.bind_identity().to_string();
        let bind_dn = self.config.bind_dn.as_deref().unwrap_or("");
        let password = self.config.bind_password.as_deref().unwrap_or("");

        let bound = ldap
            .simple_bind(bind_dn, password)
            .await
            .and_then(|res| res.success());

        if let Err(e) = bound {
            driver.abort();
            return Err(DirectoryError::Bind {
                identity,
                message: e.to_string(),
            });
        }
        debug!("bound to {url} as {identity}");

        Ok(Box::new(LdapSession {
            ldap,
            driver,
            base_dn: self.config.base_dn.clone(),
            strategy: self.config.strategy,
        }))
    }
}

pub struct LdapSession {
    ldap: Ldap,
    driver: JoinHandle<()>,
    base_dn: String,
    strategy: MembershipStrategy,
}

impl LdapSession {
    async fn search(
        &mut self,
        phase: &'static str,
        base: &str,
        scope: Scope,
        filter: &str,
        attrs: &[&str],
    ) -> Result<Vec<SearchEntry>, DirectoryError> {
        let search_err = |e: ldap3::LdapError| DirectoryError::Search {
            phase,
            message: e.to_string(),
        };

        let (entries, _res) = self
            .ldap
            .search(base, scope, filter, attrs.to_vec())
            .await
            .map_err(search_err)?
            .success()
            .map_err(search_err)?;

        Ok(entries
            .into_iter()
            .filter(|entry| !entry.is_ref() && !entry.is_intermediate())
            .map(SearchEntry::construct)
            .collect())
    }

    async fn token_groups(&mut self, user: &UserRecord) -> Result<Vec<GroupRecord>, DirectoryError> {
        let entries = self
            .search(
                "token groups",
                &user.distinguished_name,
                Scope::Base,
                "(objectClass=*)",
                &["tokenGroups"],
            )
            .await?;

        let sids: Vec<Vec<u8>> = entries
            .into_iter()
            .next()
            .map(|entry| entry::binary_values(&entry, "tokenGroups"))
            .unwrap_or_default();
        debug!("account carries {} token group SIDs", sids.len());

        let base_dn = self.base_dn.clone();
        let mut groups: Vec<GroupRecord> = Vec::with_capacity(sids.len());

        for batch in sids.chunks(SID_BATCH) {
            let entries = self
                .search(
                    "resolve SIDs",
                    &base_dn,
                    Scope::Subtree,
                    &filter::any_object_sid(batch),
                    &GROUP_ATTRS,
                )
                .await?;

            if entries.len() < batch.len() {
                log_unresolved(batch, &entries);
            }
            groups.extend(entries.iter().map(entry::to_group_record));
        }

        Ok(groups)
    }

    async fn groups_in_chain(&mut self, user: &UserRecord) -> Result<Vec<GroupRecord>, DirectoryError> {
        let base_dn = self.base_dn.clone();
        let entries = self
            .search(
                "nested groups",
                &base_dn,
                Scope::Subtree,
                &filter::groups_in_chain(&user.distinguished_name),
                &GROUP_ATTRS,
            )
            .await?;

        let mut groups: Vec<GroupRecord> = entries.iter().map(entry::to_group_record).collect();
        // The primary group is implied by primaryGroupID, not by a member link.
        groups.extend(self.primary_group(user).await?);
        Ok(groups)
    }

    async fn primary_group(&mut self, user: &UserRecord) -> Result<Option<GroupRecord>, DirectoryError> {
        let (Some(account_sid), Some(rid)) = (user.security_id.as_deref(), user.primary_group_id)
        else {
            debug!("no objectSid or primaryGroupID on {}", user.distinguished_name);
            return Ok(None);
        };
        let Some(group_sid) = sid::primary_group_sid(account_sid, rid) else {
            warn!("malformed objectSid on {}", user.distinguished_name);
            return Ok(None);
        };

        let base_dn = self.base_dn.clone();
        let entries = self
            .search(
                "primary group",
                &base_dn,
                Scope::Subtree,
                &filter::any_object_sid(&[group_sid]),
                &GROUP_ATTRS,
            )
            .await?;

        if entries.is_empty() {
            debug!("primary group {rid} has no object under the search base");
        }
        Ok(entries.first().map(entry::to_group_record))
    }
}

#[async_trait]
impl DirectorySession for LdapSession {
    async fn find_user(&mut self, account_name: &str) -> Result<Option<UserRecord>, DirectoryError> {
        let base_dn = self.base_dn.clone();
        let mut entries = self
            .search(
                "find user",
                &base_dn,
                Scope::Subtree,
                &filter::user_by_account_name(account_name),
                &USER_ATTRS,
            )
            .await?;

        if entries.len() > 1 {
            warn!(
                "{} accounts match '{account_name}', using {}",
                entries.len(),
                entries[0].dn
            );
        }

        if entries.is_empty() {
            return Ok(None);
        }
        Ok(Some(entry::to_user_record(entries.swap_remove(0), account_name)))
    }

    async fn authorization_groups(
        &mut self,
        user: &UserRecord,
    ) -> Result<Vec<GroupRecord>, DirectoryError> {
        match self.strategy {
            MembershipStrategy::TokenGroups => self.token_groups(user).await,
            MembershipStrategy::InChain => self.groups_in_chain(user).await,
        }
    }

    async fn close(self: Box<Self>) -> Result<(), DirectoryError> {
        let LdapSession {
            mut ldap,
            mut driver,
            ..
        } = *self;

        let unbound = ldap.unbind().await;
        drop(ldap);

        // Give the driver a moment to notice the unbind before tearing it down.
        if tokio::time::timeout(Duration::from_millis(200), &mut driver).await.is_err() {
            driver.abort();
        }

        unbound.map_err(|e| DirectoryError::Search {
            phase: "unbind",
            message: e.to_string(),
        })
    }
}

fn log_unresolved(batch: &[Vec<u8>], entries: &[SearchEntry]) {
    let resolved: Vec<Vec<u8>> = entries
        .iter()
        .flat_map(|entry| entry::binary_values(entry, "objectSid"))
        .collect();

    for sid in batch.iter().filter(|sid| !resolved.contains(sid)) {
        let rendered = sid::format_sid(sid).unwrap_or_else(|| sid::escape_filter_bytes(sid));
        debug!("token group {rendered} has no object under the search base");
    }
}
