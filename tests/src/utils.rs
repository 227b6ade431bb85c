use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use adgroups_common::directory::{DirectoryGateway, DirectorySession, GroupRecord, UserRecord};
use adgroups_common::error::DirectoryError;
use adgroups_core::lookup::DirectoryLookupService;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

/// Counts what the lookup service did against the directory.
#[derive(Default)]
pub struct Probe {
    opens: AtomicUsize,
    closes: AtomicUsize,
    queried: Mutex<Vec<String>>,
}

impl Probe {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[derive(Clone, Default)]
enum Failure {
    #[default]
    None,
    Connect(String),
    Groups(String),
}

/// Directory double holding accounts and their (already transitive) groups.
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    users: HashMap<String, Vec<GroupRecord>>,
    failure: Failure,
    probe: Arc<Probe>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, account_name: &str, groups: Vec<GroupRecord>) -> Self {
        self.users.insert(account_name.to_ascii_lowercase(), groups);
        self
    }

    pub fn unreachable(mut self, message: &str) -> Self {
        self.failure = Failure::Connect(message.to_string());
        self
    }

    pub fn failing_groups(mut self, message: &str) -> Self {
        self.failure = Failure::Groups(message.to_string());
        self
    }

    pub fn probe(&self) -> Arc<Probe> {
        self.probe.clone()
    }

    pub fn into_service(self) -> DirectoryLookupService {
        DirectoryLookupService::new(Box::new(self))
    }
}

#[async_trait]
impl DirectoryGateway for InMemoryDirectory {
    async fn open(&self) -> Result<Box<dyn DirectorySession>, DirectoryError> {
        if let Failure::Connect(message) = &self.failure {
            return Err(DirectoryError::Connect {
                url: "ldap://dc.test".to_string(),
                message: message.clone(),
            });
        }
        self.probe.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(self.clone()))
    }
}

#[async_trait]
impl DirectorySession for InMemoryDirectory {
    async fn find_user(&mut self, account_name: &str) -> Result<Option<UserRecord>, DirectoryError> {
        self.probe
            .queried
            .lock()
            .unwrap()
            .push(account_name.to_string());

        let key = account_name.to_ascii_lowercase();
        Ok(self
            .users
            .contains_key(&key)
            .then(|| UserRecord::new(account_name, format!("CN={account_name},DC=test"))))
    }

    async fn authorization_groups(
        &mut self,
        user: &UserRecord,
    ) -> Result<Vec<GroupRecord>, DirectoryError> {
        if let Failure::Groups(message) = &self.failure {
            return Err(DirectoryError::Search {
                phase: "token groups",
                message: message.clone(),
            });
        }
        Ok(self
            .users
            .get(&user.account_name.to_ascii_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    async fn close(self: Box<Self>) -> Result<(), DirectoryError> {
        self.probe.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn group(name: &str) -> GroupRecord {
    GroupRecord::with_dn(format!("CN={name},OU=Groups,DC=test")).display_name(name)
}

pub fn march_first() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}
