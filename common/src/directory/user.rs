/// An account resolved by its short logon name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Short logon name (`sAMAccountName`).
    pub account_name: String,
    pub distinguished_name: String,
    /// Binary `objectSid`, when the directory returned one.
    pub security_id: Option<Vec<u8>>,
    /// RID of the primary group (`primaryGroupID`).
    pub primary_group_id: Option<u32>,
}

impl UserRecord {
    pub fn new(account_name: impl Into<String>, distinguished_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            distinguished_name: distinguished_name.into(),
            security_id: None,
            primary_group_id: None,
        }
    }
}
