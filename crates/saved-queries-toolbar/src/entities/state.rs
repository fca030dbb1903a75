use super::{QueryId, SavedQuery};

/// Partial patch applied to a stored query by [`SavedQueriesAction::Update`].
///
/// Absent fields keep their stored value. Foreign associations are opaque
/// to the toolbar and cannot be patched through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedQueryPatch {
    pub id: QueryId,
    pub name: Option<String>,
    pub query: Option<String>,
    pub is_default: Option<bool>,
}

impl SavedQueryPatch {
    pub fn new(id: impl Into<QueryId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            query: None,
            is_default: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = Some(is_default);
        self
    }
}

/// Actions understood by the saved-queries reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedQueriesAction {
    /// Replace the collection. `shared_id` is a selection hint plucked from
    /// the page URL; it only wins when no stored query is flagged default
    /// and it names a member of the new collection.
    Init {
        queries: Vec<SavedQuery>,
        shared_id: Option<QueryId>,
    },
    /// Set the selection unconditionally. Selecting an id with no matching
    /// query is legal; consumers resolve it to a "not found" view.
    Select(Option<QueryId>),
    /// Append a freshly persisted query and select it. The caller
    /// guarantees id uniqueness.
    Create(SavedQuery),
    /// Merge a partial patch into the matching query. No-op when the id is
    /// unknown; the selection is never touched.
    Update(SavedQueryPatch),
    /// Remove the matching query and reselect the first remaining one.
    Delete(QueryId),
}

/// The saved-queries collection and selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedQueriesState {
    pub queries: Vec<SavedQuery>,
    pub current_id: Option<QueryId>,
    pub initialized: bool,
}

/// Pure transition function over the saved-queries state.
///
/// Every call returns a fresh state value; the input is never mutated.
pub fn saved_queries_reducer(
    state: &SavedQueriesState,
    action: SavedQueriesAction,
) -> SavedQueriesState {
    match action {
        SavedQueriesAction::Init { queries, shared_id } => {
            let default_id = queries.iter().find(|q| q.is_default).map(|q| q.id.clone());
            let shared_id = shared_id.filter(|id| queries.iter().any(|q| &q.id == id));
            let current_id = default_id
                .or(shared_id)
                .or_else(|| queries.first().map(|q| q.id.clone()));
            SavedQueriesState {
                queries,
                current_id,
                initialized: true,
            }
        }
        SavedQueriesAction::Select(id) => SavedQueriesState {
            current_id: id,
            ..state.clone()
        },
        SavedQueriesAction::Create(query) => {
            let current_id = Some(query.id.clone());
            let mut queries = state.queries.clone();
            queries.push(query);
            SavedQueriesState {
                queries,
                current_id,
                initialized: state.initialized,
            }
        }
        SavedQueriesAction::Update(patch) => {
            let queries = state
                .queries
                .iter()
                .map(|stored| {
                    if stored.id != patch.id {
                        return stored.clone();
                    }
                    let mut updated = stored.clone();
                    if let Some(name) = &patch.name {
                        updated.name = name.clone();
                    }
                    if let Some(query) = &patch.query {
                        updated.query = query.clone();
                    }
                    if let Some(is_default) = patch.is_default {
                        updated.is_default = is_default;
                    }
                    updated
                })
                .collect();
            SavedQueriesState {
                queries,
                ..state.clone()
            }
        }
        SavedQueriesAction::Delete(id) => {
            let queries: Vec<SavedQuery> = state
                .queries
                .iter()
                .filter(|q| q.id != id)
                .cloned()
                .collect();
            let current_id = queries.first().map(|q| q.id.clone());
            SavedQueriesState {
                queries,
                current_id,
                initialized: state.initialized,
            }
        }
    }
}
