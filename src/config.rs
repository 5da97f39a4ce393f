/// Per-call knobs shared by every solver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Record the ordered expand/insert events of the search in [PathFindResult::trace](crate::PathFindResult::trace).
    pub record_trace: bool,
    /// Give up after this many node expansions, reporting
    /// [SearchStatus::ExpansionLimit](crate::SearchStatus::ExpansionLimit).
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }
    pub fn with_trace(mut self) -> SearchConfig {
        self.record_trace = true;
        self
    }
    pub fn with_max_expansions(mut self, limit: usize) -> SearchConfig {
        self.max_expansions = Some(limit);
        self
    }
}
