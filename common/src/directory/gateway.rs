use async_trait::async_trait;

use crate::directory::{GroupRecord, UserRecord};
use crate::error::DirectoryError;

/// Defines the contract for reaching a directory service.
///
/// A gateway is cheap to hold; every lookup opens its own [`DirectorySession`].
#[async_trait]
pub trait DirectoryGateway: Send + Sync {
    /// Connects and authenticates, returning a session scoped to one lookup.
    async fn open(&self) -> Result<Box<dyn DirectorySession>, DirectoryError>;
}

/// A live, authenticated connection to the directory.
///
/// Callers must finish every session with [`DirectorySession::close`], whatever the
/// outcome of the queries made on it.
#[async_trait]
pub trait DirectorySession: Send {
    /// Finds an account by its short logon name within the configured domain.
    ///
    /// # Returns
    /// * `Ok(Some(user))` - The account exists.
    /// * `Ok(None)` - The directory answered and the account does not exist.
    async fn find_user(&mut self, account_name: &str) -> Result<Option<UserRecord>, DirectoryError>;

    /// Retrieves every group `user` is authorized for, including nested memberships.
    async fn authorization_groups(
        &mut self,
        user: &UserRecord,
    ) -> Result<Vec<GroupRecord>, DirectoryError>;

    /// Releases the connection.
    async fn close(self: Box<Self>) -> Result<(), DirectoryError>;
}
