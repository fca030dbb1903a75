use std::mem;
use std::sync::Arc;

use tracing::warn;

use crate::context::SavedQueriesHandle;
use crate::entities::{
    QueryDraft, QueryId, SavedQueriesAction, SavedQuery, SavedQueryPatch, SnackbarNotice,
    ToolbarCommand,
};
use crate::error::ToolbarError;
use crate::use_cases::ports::{
    AddressBar, Clipboard, QueryPersistence, QueryValidityOracle, ToastSink,
};
use crate::use_cases::share_query::{create_query_sharing_url, pluck_query_id_from_url};
use crate::use_cases::validate_query::validate_query;
use crate::DefaultToastSink;
use crate::{MemoryAddressBar, MemoryClipboard};

/// Name seeded into the drafts when a blank query is started
pub const NEW_QUERY_NAME: &str = "New Query";

/// Entries of the toolbar's actions menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    Share,
    SetAsDefault,
    Delete,
    NewQuery,
}

/// Presentation flags for the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarOptions {
    /// Only graph owners may mutate saved queries
    pub is_owner: bool,
    /// Mobile layouts hide the actions menu
    pub is_mobile: bool,
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        Self {
            is_owner: true,
            is_mobile: false,
        }
    }
}

/// Delete runs in two phases: the request parks the query here while the
/// undo window is open, and only confirmation removes it for real.
#[derive(Debug)]
enum DeleteFlow {
    Idle,
    Pending(SavedQuery),
}

#[cfg(feature = "apollo-parser")]
fn default_oracle() -> Arc<dyn QueryValidityOracle> {
    Arc::new(crate::ApolloParser::new())
}

#[cfg(not(feature = "apollo-parser"))]
fn default_oracle() -> Arc<dyn QueryValidityOracle> {
    Arc::new(crate::PermissiveOracle::new())
}

/// Builder for [`SavedQueriesToolbar`]
#[derive(Default)]
pub struct ToolbarBuilder {
    context: Option<SavedQueriesHandle>,
    persistence: Option<Arc<dyn QueryPersistence>>,
    toast_sink: Option<Arc<dyn ToastSink>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    address_bar: Option<Arc<dyn AddressBar>>,
    oracle: Option<Arc<dyn QueryValidityOracle>>,
    options: ToolbarOptions,
}

impl ToolbarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share a state container with other components instead of creating
    /// a private one
    pub fn context(mut self, context: SavedQueriesHandle) -> Self {
        self.context = Some(context);
        self
    }

    pub fn persistence(mut self, persistence: Arc<dyn QueryPersistence>) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub fn toast_sink(mut self, toast_sink: Arc<dyn ToastSink>) -> Self {
        self.toast_sink = Some(toast_sink);
        self
    }

    pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn address_bar(mut self, address_bar: Arc<dyn AddressBar>) -> Self {
        self.address_bar = Some(address_bar);
        self
    }

    pub fn oracle(mut self, oracle: Arc<dyn QueryValidityOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn options(mut self, options: ToolbarOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the toolbar. A persistence backend is the one collaborator
    /// without a sensible default.
    pub fn build(self) -> Result<SavedQueriesToolbar, ToolbarError> {
        let persistence = self.persistence.ok_or_else(|| {
            ToolbarError::ConfigurationError("a persistence backend is required".to_string())
        })?;
        Ok(SavedQueriesToolbar {
            context: self.context.unwrap_or_default(),
            persistence,
            toast_sink: self
                .toast_sink
                .unwrap_or_else(|| Arc::new(DefaultToastSink::new())),
            clipboard: self
                .clipboard
                .unwrap_or_else(|| Arc::new(MemoryClipboard::new())),
            address_bar: self
                .address_bar
                .unwrap_or_else(|| Arc::new(MemoryAddressBar::default())),
            oracle: self.oracle.unwrap_or_else(default_oracle),
            options: self.options,
            delete_flow: DeleteFlow::Idle,
        })
    }
}

/// Controller for the saved-queries toolbar.
///
/// It owns the workflow around the pure reducer: validating drafts,
/// talking to persistence, staging deletes behind an undo window and
/// raising toasts. All state lives in the shared [`SavedQueriesHandle`].
pub struct SavedQueriesToolbar {
    context: SavedQueriesHandle,
    persistence: Arc<dyn QueryPersistence>,
    toast_sink: Arc<dyn ToastSink>,
    clipboard: Arc<dyn Clipboard>,
    address_bar: Arc<dyn AddressBar>,
    oracle: Arc<dyn QueryValidityOracle>,
    options: ToolbarOptions,
    delete_flow: DeleteFlow,
}

impl SavedQueriesToolbar {
    pub fn builder() -> ToolbarBuilder {
        ToolbarBuilder::new()
    }

    pub fn context(&self) -> &SavedQueriesHandle {
        &self.context
    }

    pub fn options(&self) -> &ToolbarOptions {
        &self.options
    }

    /// Whether the actions menu is rendered at all
    pub fn shows_actions(&self) -> bool {
        self.options.is_owner && !self.options.is_mobile
    }

    /// Id of the query currently staged for deletion
    pub fn pending_delete(&self) -> Option<QueryId> {
        match &self.delete_flow {
            DeleteFlow::Pending(query) => Some(query.id.clone()),
            DeleteFlow::Idle => None,
        }
    }

    /// Load the collection, honoring a shared-query link in the address bar
    pub fn initialize(&mut self, queries: Vec<SavedQuery>) {
        let shared_id = pluck_query_id_from_url(&self.address_bar);
        self.context
            .dispatch(SavedQueriesAction::Init { queries, shared_id });
        self.sync_drafts_to_selection();
    }

    /// Change the selection and reload the drafts from the newly selected
    /// query
    pub fn select(&mut self, id: Option<QueryId>) {
        self.context.dispatch(SavedQueriesAction::Select(id));
        self.sync_drafts_to_selection();
    }

    fn sync_drafts_to_selection(&self) {
        if let Some(query) = self.context.current_query() {
            self.context.set_drafts(QueryDraft::from(&query));
        }
    }

    /// Run a command fed back from a toast surface
    pub async fn run_command(&mut self, command: ToolbarCommand) {
        match command {
            ToolbarCommand::UndoDelete => self.undo_delete(),
            ToolbarCommand::ConfirmDelete => self.confirm_delete().await,
        }
    }

    /// Dispatch an entry of the actions menu
    pub async fn handle_action(&mut self, action: QueryAction) -> Result<(), ToolbarError> {
        match action {
            QueryAction::Share => self.share()?,
            QueryAction::SetAsDefault => self.set_as_default().await,
            QueryAction::Delete => self.request_delete().await,
            QueryAction::NewQuery => self.new_query(),
        }
        Ok(())
    }

    /// Copy a sharing link for the selected query to the clipboard
    pub fn share(&self) -> Result<(), ToolbarError> {
        let id = match self.context.current_id() {
            Some(id) => id,
            None => return Ok(()),
        };
        let url = create_query_sharing_url(self.address_bar.as_ref(), &id);
        self.clipboard.write_text(url.as_str())?;
        self.notify(SnackbarNotice::UrlCopied);
        Ok(())
    }

    /// Make the selected query the default one, clearing the flag on every
    /// other query
    pub async fn set_as_default(&self) {
        let id = match self.context.current_id() {
            Some(id) => id,
            None => return,
        };
        match self.persistence.set_query_as_default(&id).await {
            Ok(()) => {
                for query in self.context.queries() {
                    let should_be_default = query.id == id;
                    if query.is_default != should_be_default {
                        self.context.dispatch(SavedQueriesAction::Update(
                            SavedQueryPatch::new(query.id.clone()).with_default(should_be_default),
                        ));
                    }
                }
                self.notify(SnackbarNotice::DefaultQuerySet);
            }
            Err(error) => {
                warn!(%error, "failed to set the default query");
                self.notify(SnackbarNotice::SetDefaultFailed);
            }
        }
    }

    /// Clear the selection and seed the name draft for a blank query.
    /// The source draft is kept, so the current buffer can be saved as new.
    pub fn new_query(&self) {
        self.context.dispatch(SavedQueriesAction::Select(None));
        self.context.set_name_draft(NEW_QUERY_NAME);
    }

    /// Stage the selected query for deletion.
    ///
    /// The query stays in the collection while the undo window is open;
    /// only the selection moves on. A request arriving while another
    /// query is already staged commits that one first.
    pub async fn request_delete(&mut self) {
        let current = match self.context.current_query() {
            Some(query) => query,
            None => return,
        };
        if current.is_default {
            self.notify(SnackbarNotice::DefaultQueryUndeletable);
            return;
        }
        match mem::replace(&mut self.delete_flow, DeleteFlow::Idle) {
            DeleteFlow::Pending(previous) if previous.id != current.id => {
                self.commit_delete(previous).await;
            }
            _ => {}
        }
        let next_id = self
            .context
            .queries()
            .iter()
            .map(|q| q.id.clone())
            .find(|id| *id != current.id);
        self.context.dispatch(SavedQueriesAction::Select(next_id));
        self.sync_drafts_to_selection();
        self.delete_flow = DeleteFlow::Pending(current);
        self.notify(SnackbarNotice::QueryDeleted);
    }

    /// Reinstate the staged query and select it again
    pub fn undo_delete(&mut self) {
        if let DeleteFlow::Pending(query) = mem::replace(&mut self.delete_flow, DeleteFlow::Idle) {
            self.select(Some(query.id));
        }
    }

    /// Commit the staged delete. A no-op when nothing is staged, so toast
    /// close events can call it unconditionally.
    pub async fn confirm_delete(&mut self) {
        if let DeleteFlow::Pending(query) = mem::replace(&mut self.delete_flow, DeleteFlow::Idle) {
            self.commit_delete(query).await;
        }
    }

    async fn commit_delete(&self, query: SavedQuery) {
        self.context
            .dispatch(SavedQueriesAction::Delete(query.id.clone()));
        // The removal is optimistic; a persistence failure is reported but
        // not unwound.
        if let Err(error) = self.persistence.delete_query(&query.id).await {
            warn!(%error, "failed to delete query");
        }
    }

    /// Persist the drafts into the selected query.
    ///
    /// An empty name draft keeps the stored name. Validation failures
    /// raise a toast and leave both the drafts and the store untouched.
    pub async fn save(&self) {
        let current = match self.context.current_query() {
            Some(query) => query,
            None => return,
        };
        let drafts = self.context.drafts();
        let name = if drafts.name.is_empty() {
            current.name.clone()
        } else {
            drafts.name.clone()
        };
        let queries = self.context.queries();
        if let Err(error) = validate_query(
            &name,
            &drafts.source,
            &queries,
            Some(&current.id),
            self.oracle.as_ref(),
        ) {
            self.notify(error.into());
            return;
        }
        match self
            .persistence
            .update_query(&current.id, &name, &drafts.source)
            .await
        {
            Ok(()) => {
                self.context.dispatch(SavedQueriesAction::Update(
                    SavedQueryPatch::new(current.id.clone())
                        .with_name(name)
                        .with_query(drafts.source.clone()),
                ));
                self.notify(SnackbarNotice::QueryUpdated);
            }
            Err(error) => {
                warn!(%error, "failed to update query");
                self.notify(SnackbarNotice::UpdateFailed);
            }
        }
    }

    /// Persist the drafts as a fresh query and select it
    pub async fn save_as_new(&self) {
        let drafts = self.context.drafts();
        let name = if drafts.name.is_empty() {
            self.context
                .current_query()
                .map(|q| q.name)
                .unwrap_or_default()
        } else {
            drafts.name.clone()
        };
        let queries = self.context.queries();
        if let Err(error) = validate_query(&name, &drafts.source, &queries, None, self.oracle.as_ref())
        {
            self.notify(error.into());
            return;
        }
        match self.persistence.create_query(&name, &drafts.source).await {
            Ok(saved) => {
                self.context.dispatch(SavedQueriesAction::Create(saved));
                self.notify(SnackbarNotice::QueryCreated);
            }
            Err(error) => {
                warn!(%error, "failed to create query");
                self.notify(SnackbarNotice::CreateFailed);
            }
        }
    }

    /// Throw away the drafts and reload them from the selected query
    pub fn cancel(&self) {
        self.sync_drafts_to_selection();
    }

    /// Save is enabled once the drafts drift from the stored query
    pub fn can_save(&self) -> bool {
        match self.context.current_query() {
            Some(current) => self.context.drafts().differs_from(&current),
            None => false,
        }
    }

    /// Cancel mirrors save: there has to be something to throw away
    pub fn can_reset(&self) -> bool {
        self.can_save()
    }

    /// Save-as-new needs a name that would not shadow the selected query
    pub fn can_save_as_new(&self) -> bool {
        let name = self.context.drafts().name;
        match self.context.current_query() {
            Some(current) => {
                let effective = if name.is_empty() {
                    current.name.clone()
                } else {
                    name
                };
                effective != current.name
            }
            None => true,
        }
    }

    fn notify(&self, notice: SnackbarNotice) {
        self.toast_sink.push(notice.to_toast_message());
    }
}
