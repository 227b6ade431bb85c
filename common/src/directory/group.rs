//! # Group Record Model
//!
//! A raw group entry and the rule that turns it into a display label.

/// A group entry as returned by the directory, before name resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRecord {
    pub display_name: Option<String>,
    /// `cn`
    pub common_name: Option<String>,
    /// `sAMAccountName`
    pub account_name: Option<String>,
    pub distinguished_name: Option<String>,
}

impl GroupRecord {
    /// Builds a record that only knows its distinguished name.
    pub fn with_dn(distinguished_name: impl Into<String>) -> Self {
        Self {
            distinguished_name: Some(distinguished_name.into()),
            ..Self::default()
        }
    }

    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }

    pub fn common_name(mut self, value: impl Into<String>) -> Self {
        self.common_name = Some(value.into());
        self
    }

    pub fn account_name(mut self, value: impl Into<String>) -> Self {
        self.account_name = Some(value.into());
        self
    }

    /// Label for this group: display name, else common name, else account name,
    /// else distinguished name.
    ///
    /// Blank values are skipped; the chosen value is returned as stored.
    /// Returns `None` when every source is absent or blank.
    pub fn resolved_name(&self) -> Option<&str> {
        [
            &self.display_name,
            &self.common_name,
            &self.account_name,
            &self.distinguished_name,
        ]
        .into_iter()
        .filter_map(|candidate| candidate.as_deref())
        .find(|candidate| !candidate.trim().is_empty())
    }

    /// Identity used to collapse duplicate entries of the same group.
    pub fn identity(&self) -> Option<String> {
        self.distinguished_name
            .as_deref()
            .map(str::trim)
            .filter(|dn| !dn.is_empty())
            .map(str::to_ascii_lowercase)
    }
}
