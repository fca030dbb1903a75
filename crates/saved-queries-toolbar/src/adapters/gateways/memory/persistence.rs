use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::entities::{QueryId, SavedQuery};
use crate::error::ToolbarError;
use crate::use_cases::ports::QueryPersistence;

/// In-memory persistence backend.
///
/// Ids come from a counter, the way a backend hands out row ids. Handy
/// for demos and tests; everything is gone on drop.
pub struct InMemoryPersistence {
    queries: Mutex<Vec<SavedQuery>>,
    next_id: AtomicU64,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Seed the backend with existing queries. The id counter skips past
    /// any numeric seed id so created queries never collide with them.
    pub fn with_queries(queries: Vec<SavedQuery>) -> Self {
        let highest = queries
            .iter()
            .filter_map(|q| q.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            queries: Mutex::new(queries),
            next_id: AtomicU64::new(highest + 1),
        }
    }

    /// Snapshot of the stored queries
    pub fn queries(&self) -> Vec<SavedQuery> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryPersistence {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryPersistence for InMemoryPersistence {
    async fn create_query(&self, name: &str, source: &str) -> Result<SavedQuery, ToolbarError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let query = SavedQuery::new(id, name, source);
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        Ok(query)
    }

    async fn update_query(
        &self,
        id: &QueryId,
        name: &str,
        source: &str,
    ) -> Result<(), ToolbarError> {
        let mut queries = self
            .queries
            .lock()
            .map_err(|_| ToolbarError::PersistenceError("store lock poisoned".to_string()))?;
        match queries.iter_mut().find(|q| &q.id == id) {
            Some(stored) => {
                stored.name = name.to_string();
                stored.query = source.to_string();
                Ok(())
            }
            None => Err(ToolbarError::PersistenceError(format!(
                "no query with id {id}"
            ))),
        }
    }

    async fn delete_query(&self, id: &QueryId) -> Result<(), ToolbarError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.retain(|q| &q.id != id);
        }
        Ok(())
    }

    async fn set_query_as_default(&self, id: &QueryId) -> Result<(), ToolbarError> {
        let mut queries = self
            .queries
            .lock()
            .map_err(|_| ToolbarError::PersistenceError("store lock poisoned".to_string()))?;
        if !queries.iter().any(|q| &q.id == id) {
            return Err(ToolbarError::PersistenceError(format!(
                "no query with id {id}"
            )));
        }
        for query in queries.iter_mut() {
            query.is_default = &query.id == id;
        }
        Ok(())
    }
}
