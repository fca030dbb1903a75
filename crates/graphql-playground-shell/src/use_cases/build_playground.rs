use std::mem;
use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::debug;

use saved_queries_toolbar::context::SavedQueriesHandle;
use saved_queries_toolbar::entities::{QueryId, SavedQuery};
use saved_queries_toolbar::use_cases::ports::{
    AddressBar, Clipboard, QueryPersistence, QueryValidityOracle, ToastSink,
};
use saved_queries_toolbar::use_cases::{SavedQueriesToolbar, ToolbarOptions};

use crate::entities::{FetcherOptions, GraphQLRequest};
use crate::error::ShellError;
use crate::use_cases::extend_fetcher::ValidatingFetcher;
use crate::use_cases::ports::{EditorStorage, EditorSurface, Fetcher};
use crate::DefaultStorage;

/// Answers the toolbar's syntax question from the editor surface, which
/// already runs a parser for its own diagnostics
struct EditorOracle {
    editor: Arc<dyn EditorSurface>,
}

impl QueryValidityOracle for EditorOracle {
    fn has_syntax_errors(&self, _source: &str) -> bool {
        self.editor.has_syntax_errors()
    }
}

#[cfg(feature = "reqwest")]
fn fetcher_from_options(options: FetcherOptions) -> Result<Arc<dyn Fetcher>, ShellError> {
    Ok(Arc::new(ValidatingFetcher::new(crate::Reqwest::new(
        options,
    ))))
}

#[cfg(not(feature = "reqwest"))]
fn fetcher_from_options(_options: FetcherOptions) -> Result<Arc<dyn Fetcher>, ShellError> {
    Err(ShellError::ConfigurationError(
        "fetcher options need the reqwest feature; pass a fetcher instead".to_string(),
    ))
}

/// Builder for [`Playground`]
#[derive(Default)]
pub struct PlaygroundBuilder {
    editor: Option<Arc<dyn EditorSurface>>,
    storage: Option<Arc<dyn EditorStorage>>,
    fetcher: Option<Arc<dyn Fetcher>>,
    fetcher_options: Option<FetcherOptions>,
    persistence: Option<Arc<dyn QueryPersistence>>,
    toast_sink: Option<Arc<dyn ToastSink>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    address_bar: Option<Arc<dyn AddressBar>>,
    oracle: Option<Arc<dyn QueryValidityOracle>>,
    queries: Vec<SavedQuery>,
    current_query_id: Option<QueryId>,
    options: ToolbarOptions,
}

impl PlaygroundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor(mut self, editor: Arc<dyn EditorSurface>) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn storage(mut self, storage: Arc<dyn EditorStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Use a prebuilt fetcher. It still goes through request validation.
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the fetcher from connection settings instead
    pub fn fetcher_options(mut self, options: FetcherOptions) -> Self {
        self.fetcher_options = Some(options);
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

    /// Saved queries to load on start
    pub fn queries(mut self, queries: Vec<SavedQuery>) -> Self {
        self.queries = queries;
        self
    }

    /// Select this query on start, overriding defaults and sharing links
    pub fn current_query_id(mut self, id: QueryId) -> Self {
        self.current_query_id = Some(id);
        self
    }

    pub fn options(mut self, options: ToolbarOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the playground. An editor surface, a persistence backend and
    /// either a fetcher or fetcher options are required.
    pub fn build(self) -> Result<Playground, ShellError> {
        let editor = self.editor.ok_or_else(|| {
            ShellError::ConfigurationError("an editor surface is required".to_string())
        })?;
        let persistence = self.persistence.ok_or_else(|| {
            ShellError::ConfigurationError("a persistence backend is required".to_string())
        })?;
        let fetcher = match (self.fetcher, self.fetcher_options) {
            (Some(fetcher), _) => Arc::new(ValidatingFetcher::new(fetcher)) as Arc<dyn Fetcher>,
            (None, Some(options)) => fetcher_from_options(options)?,
            (None, None) => {
                return Err(ShellError::ConfigurationError(
                    "a fetcher or fetcher options are required".to_string(),
                ))
            }
        };

        let context = SavedQueriesHandle::new();
        let oracle = self.oracle.unwrap_or_else(|| {
            Arc::new(EditorOracle {
                editor: editor.clone(),
            })
        });
        let mut toolbar_builder = SavedQueriesToolbar::builder()
            .context(context.clone())
            .persistence(persistence)
            .oracle(oracle)
            .options(self.options);
        if let Some(toast_sink) = self.toast_sink {
            toolbar_builder = toolbar_builder.toast_sink(toast_sink);
        }
        if let Some(clipboard) = self.clipboard {
            toolbar_builder = toolbar_builder.clipboard(clipboard);
        }
        if let Some(address_bar) = self.address_bar {
            toolbar_builder = toolbar_builder.address_bar(address_bar);
        }
        let toolbar = toolbar_builder.build()?;

        Ok(Playground {
            context,
            toolbar,
            fetcher,
            editor,
            storage: self
                .storage
                .unwrap_or_else(|| Arc::new(DefaultStorage::new())),
            queries: self.queries,
            current_query_id: self.current_query_id,
            pumps: Vec::new(),
        })
    }
}

/// An assembled playground: the saved-queries toolbar, the editor surface
/// it mirrors and the fetcher running requests.
///
/// After [`Playground::start`] two background pumps keep the editor and
/// the source draft in lockstep, in both directions.
pub struct Playground {
    context: SavedQueriesHandle,
    toolbar: SavedQueriesToolbar,
    fetcher: Arc<dyn Fetcher>,
    editor: Arc<dyn EditorSurface>,
    storage: Arc<dyn EditorStorage>,
    queries: Vec<SavedQuery>,
    current_query_id: Option<QueryId>,
    pumps: Vec<JoinHandle<()>>,
}

impl Playground {
    pub fn builder() -> PlaygroundBuilder {
        PlaygroundBuilder::new()
    }

    /// Load the saved queries, bring the editor in line with the selection
    /// and start the synchronization pumps
    pub async fn start(&mut self) {
        let queries = mem::take(&mut self.queries);
        debug!(count = queries.len(), "starting playground");
        self.toolbar.initialize(queries);
        if let Some(id) = self.current_query_id.take() {
            self.toolbar.select(Some(id));
        }

        if let Some(query) = self.context.current_query() {
            if self.editor.source() != query.query {
                self.editor.set_source(&query.query);
            }
        }

        self.spawn_pumps();
    }

    fn spawn_pumps(&mut self) {
        let context = self.context.clone();
        let mut edits = self.editor.subscribe();
        let edit_pump = tokio::spawn(async move {
            while edits.changed().await.is_ok() {
                let source = edits.borrow_and_update().clone();
                if context.drafts().source != source {
                    context.set_source_draft(source);
                }
            }
        });

        let context = self.context.clone();
        let editor = self.editor.clone();
        let mut generations = context.subscribe();
        let state_pump = tokio::spawn(async move {
            while generations.changed().await.is_ok() {
                let _ = generations.borrow_and_update();
                let source = context.drafts().source;
                if editor.source() != source {
                    editor.set_source(&source);
                }
            }
        });

        self.pumps.push(edit_pump);
        self.pumps.push(state_pump);
    }

    pub fn context(&self) -> &SavedQueriesHandle {
        &self.context
    }

    pub fn toolbar(&self) -> &SavedQueriesToolbar {
        &self.toolbar
    }

    pub fn toolbar_mut(&mut self) -> &mut SavedQueriesToolbar {
        &mut self.toolbar
    }

    pub fn editor(&self) -> &Arc<dyn EditorSurface> {
        &self.editor
    }

    pub fn storage(&self) -> &Arc<dyn EditorStorage> {
        &self.storage
    }

    /// Run a request through the configured fetcher
    pub async fn fetch(&self, request: GraphQLRequest) -> Result<Value, ShellError> {
        self.fetcher.fetch(request).await
    }
}

impl Drop for Playground {
    fn drop(&mut self) {
        for pump in &self.pumps {
            pump.abort();
        }
    }
}
