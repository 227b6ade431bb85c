use adgroups_common::lookup::LookupResult;

/// Holds the most recent successful lookup of this run.
///
/// Empty at startup, cleared before every new query and replaced wholesale afterwards.
#[derive(Debug, Default)]
pub struct SessionState {
    current: Option<LookupResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was held. Only found results belong here.
    pub fn record_lookup(&mut self, result: LookupResult) {
        debug_assert!(result.found, "only found lookups are recorded");
        self.current = Some(result);
    }

    pub fn current(&self) -> Option<&LookupResult> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// True iff a result is held and it has at least one group.
    pub fn can_export(&self) -> bool {
        self.current.as_ref().is_some_and(LookupResult::has_groups)
    }
}
