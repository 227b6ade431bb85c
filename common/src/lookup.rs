//! # Lookup Result Model
//!
//! The value handed from the lookup service to the session and the exporter.

/// Outcome of one membership query for one account.
///
/// Immutable once built; a newer lookup replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub username: String,
    /// Resolved group names, sorted ascending.
    pub groups: Vec<String>,
    pub found: bool,
}

impl LookupResult {
    pub fn found(username: impl Into<String>, groups: Vec<String>) -> Self {
        Self {
            username: username.into(),
            groups,
            found: true,
        }
    }

    pub fn not_found(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            groups: Vec::new(),
            found: false,
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// True when there is at least one group worth writing to a report.
    pub fn has_groups(&self) -> bool {
        self.found && !self.groups.is_empty()
    }
}
