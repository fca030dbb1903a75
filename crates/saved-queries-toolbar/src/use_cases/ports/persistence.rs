use async_trait::async_trait;

use crate::entities::{QueryId, SavedQuery};
use crate::error::ToolbarError;

/// Storage backend for saved queries.
///
/// The toolbar applies every mutation to its own state first and calls the
/// backend afterwards, so implementations never drive state transitions.
#[async_trait]
pub trait QueryPersistence: Send + Sync {
    /// Persist a new query and return it with its server-assigned id
    async fn create_query(&self, name: &str, source: &str) -> Result<SavedQuery, ToolbarError>;

    /// Overwrite the name and source of an existing query
    async fn update_query(
        &self,
        id: &QueryId,
        name: &str,
        source: &str,
    ) -> Result<(), ToolbarError>;

    /// Remove a query
    async fn delete_query(&self, id: &QueryId) -> Result<(), ToolbarError>;

    /// Flag a query as the default one for its graph
    async fn set_query_as_default(&self, id: &QueryId) -> Result<(), ToolbarError>;
}
