use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use crate::entities::{
    saved_queries_reducer, QueryDraft, QueryId, SavedQueriesAction, SavedQueriesState, SavedQuery,
};

#[derive(Debug, Default)]
struct ContextInner {
    state: SavedQueriesState,
    drafts: QueryDraft,
}

/// Shared, observable container for the saved-queries state and drafts.
///
/// Handles are cheap to clone and all point at the same data. Every
/// mutation bumps a generation counter that `subscribe` exposes, so
/// embedders can re-render on change without polling the state itself.
#[derive(Clone)]
pub struct SavedQueriesHandle {
    inner: Arc<Mutex<ContextInner>>,
    generation: Arc<watch::Sender<u64>>,
}

impl SavedQueriesHandle {
    pub fn new() -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            inner: Arc::new(Mutex::new(ContextInner::default())),
            generation: Arc::new(generation),
        }
    }

    /// Run an action through the reducer
    pub fn dispatch(&self, action: SavedQueriesAction) {
        debug!(?action, "dispatching saved-queries action");
        if let Ok(mut inner) = self.inner.lock() {
            inner.state = saved_queries_reducer(&inner.state, action);
        }
        self.bump();
    }

    fn bump(&self) {
        self.generation.send_modify(|generation| *generation += 1);
    }

    /// Snapshot of the whole state
    pub fn state(&self) -> SavedQueriesState {
        self.inner
            .lock()
            .map(|inner| inner.state.clone())
            .unwrap_or_default()
    }

    pub fn queries(&self) -> Vec<SavedQuery> {
        self.inner
            .lock()
            .map(|inner| inner.state.queries.clone())
            .unwrap_or_default()
    }

    pub fn current_id(&self) -> Option<QueryId> {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.state.current_id.clone())
    }

    /// The selected query, when the selection resolves to a member of the
    /// collection
    pub fn current_query(&self) -> Option<SavedQuery> {
        self.inner.lock().ok().and_then(|inner| {
            let id = inner.state.current_id.as_ref()?;
            inner.state.queries.iter().find(|q| &q.id == id).cloned()
        })
    }

    pub fn find(&self, id: &QueryId) -> Option<SavedQuery> {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.state.queries.iter().find(|q| &q.id == id).cloned())
    }

    pub fn initialized(&self) -> bool {
        self.inner
            .lock()
            .map(|inner| inner.state.initialized)
            .unwrap_or(false)
    }

    pub fn drafts(&self) -> QueryDraft {
        self.inner
            .lock()
            .map(|inner| inner.drafts.clone())
            .unwrap_or_default()
    }

    pub fn name_draft(&self) -> String {
        self.drafts().name
    }

    pub fn source_draft(&self) -> String {
        self.drafts().source
    }

    pub fn set_drafts(&self, drafts: QueryDraft) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.drafts = drafts;
        }
        self.bump();
    }

    pub fn set_name_draft(&self, name: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.drafts.name = name.into();
        }
        self.bump();
    }

    pub fn set_source_draft(&self, source: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.drafts.source = source.into();
        }
        self.bump();
    }

    /// Watch the generation counter. The receiver starts with the current
    /// value already seen, so only later mutations wake it.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }
}

impl Default for SavedQueriesHandle {
    fn default() -> Self {
        Self::new()
    }
}
