use super::SavedQuery;

/// Uncommitted edit buffer for the selected query.
///
/// The buffer shadows the stored name and source until a save or cancel
/// resolves it. An empty name means "keep the stored name" on save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryDraft {
    pub name: String,
    pub source: String,
}

impl QueryDraft {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// True when committing the draft would change the stored query
    pub fn differs_from(&self, query: &SavedQuery) -> bool {
        let name_differs = !self.name.is_empty() && self.name != query.name;
        name_differs || self.source != query.query
    }
}

impl From<&SavedQuery> for QueryDraft {
    fn from(query: &SavedQuery) -> Self {
        Self {
            name: query.name.clone(),
            source: query.query.clone(),
        }
    }
}
