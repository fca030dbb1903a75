//! Integration tests for saved-queries-toolbar

use saved_queries_toolbar::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
enum PersistenceCall {
    Create {
        name: String,
        source: String,
    },
    Update {
        id: QueryId,
        name: String,
        source: String,
    },
    Delete {
        id: QueryId,
    },
    SetDefault {
        id: QueryId,
    },
}

/// Persistence fake that records every call and fails on demand
struct RecordingPersistence {
    calls: Mutex<Vec<PersistenceCall>>,
    next_id: AtomicU64,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
    fail_set_default: AtomicBool,
}

impl RecordingPersistence {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(100),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_set_default: AtomicBool::new(false),
        }
    }

    fn calls(&self) -> Vec<PersistenceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: PersistenceCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    fn fail_update(&self) {
        self.fail_update.store(true, Ordering::SeqCst);
    }

    fn fail_set_default(&self) {
        self.fail_set_default.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl QueryPersistence for RecordingPersistence {
    async fn create_query(&self, name: &str, source: &str) -> Result<SavedQuery, ToolbarError> {
        self.record(PersistenceCall::Create {
            name: name.to_string(),
            source: source.to_string(),
        });
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ToolbarError::PersistenceError("duplicate name".to_string()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(SavedQuery::new(id, name, source))
    }

    async fn update_query(
        &self,
        id: &QueryId,
        name: &str,
        source: &str,
    ) -> Result<(), ToolbarError> {
        self.record(PersistenceCall::Update {
            id: id.clone(),
            name: name.to_string(),
            source: source.to_string(),
        });
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(ToolbarError::PersistenceError("duplicate name".to_string()));
        }
        Ok(())
    }

    async fn delete_query(&self, id: &QueryId) -> Result<(), ToolbarError> {
        self.record(PersistenceCall::Delete { id: id.clone() });
        Ok(())
    }

    async fn set_query_as_default(&self, id: &QueryId) -> Result<(), ToolbarError> {
        self.record(PersistenceCall::SetDefault { id: id.clone() });
        if self.fail_set_default.load(Ordering::SeqCst) {
            return Err(ToolbarError::PersistenceError("backend refused".to_string()));
        }
        Ok(())
    }
}

/// A toolbar wired to recording fakes, ready for assertions
struct Harness {
    toolbar: SavedQueriesToolbar,
    persistence: Arc<RecordingPersistence>,
    toasts: Arc<DefaultToastSink>,
    clipboard: Arc<MemoryClipboard>,
    page: Arc<MemoryAddressBar>,
}

impl Harness {
    fn with_url(url: &str, queries: Vec<SavedQuery>) -> Self {
        let persistence = Arc::new(RecordingPersistence::new());
        let toasts = Arc::new(DefaultToastSink::new());
        let clipboard = Arc::new(MemoryClipboard::new());
        let page = Arc::new(MemoryAddressBar::parse(url).unwrap());
        let mut toolbar = SavedQueriesToolbar::builder()
            .persistence(persistence.clone())
            .toast_sink(toasts.clone())
            .clipboard(clipboard.clone())
            .address_bar(page.clone())
            .build()
            .unwrap();
        toolbar.initialize(queries);
        Self {
            toolbar,
            persistence,
            toasts,
            clipboard,
            page,
        }
    }

    fn new(queries: Vec<SavedQuery>) -> Self {
        Self::with_url("http://localhost/playground", queries)
    }

    fn toast_titles(&self) -> Vec<&'static str> {
        self.toasts
            .drain()
            .into_iter()
            .map(|toast| toast.title)
            .collect()
    }
}

fn sample_queries() -> Vec<SavedQuery> {
    vec![
        SavedQuery::new("1", "listing", "{ items { id name } }"),
        SavedQuery::new("2", "detail", "{ item(id: 1) { id name } }"),
        SavedQuery::new("3", "search", "{ search(term: \"x\") { id } }"),
    ]
}

#[tokio::test]
async fn test_initialize_selects_default_query() {
    let queries = vec![
        SavedQuery::new("1", "listing", "{ items { id name } }"),
        SavedQuery::new("2", "detail", "{ item(id: 1) { id name } }").with_default(true),
        SavedQuery::new("3", "search", "{ search(term: \"x\") { id } }"),
    ];
    let harness = Harness::new(queries);

    assert_eq!(harness.toolbar.context().current_id(), Some(QueryId::new("2")));
    let drafts = harness.toolbar.context().drafts();
    assert_eq!(drafts.name, "detail");
    assert_eq!(drafts.source, "{ item(id: 1) { id name } }");
    assert!(harness.toolbar.context().initialized());
}

#[tokio::test(start_paused = true)]
async fn test_initialize_honors_shared_link_and_strips_it() {
    let harness = Harness::with_url(
        "http://localhost/playground?playgroundQuery=3",
        sample_queries(),
    );

    assert_eq!(harness.toolbar.context().current_id(), Some(QueryId::new("3")));
    assert_eq!(
        harness.page.current_url().query(),
        Some("playgroundQuery=3"),
        "parameter sticks around for racing readers"
    );

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(harness.page.current_url().query(), None);
}

#[tokio::test(start_paused = true)]
async fn test_shared_link_loses_to_stored_default() {
    let queries = vec![
        SavedQuery::new("1", "listing", "{ items { id name } }").with_default(true),
        SavedQuery::new("2", "detail", "{ item(id: 1) { id name } }"),
    ];
    let harness = Harness::with_url("http://localhost/playground?playgroundQuery=2", queries);

    assert_eq!(harness.toolbar.context().current_id(), Some(QueryId::new("1")));

    // The link is consumed either way
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(harness.page.current_url().query(), None);
}

#[tokio::test]
async fn test_save_updates_selected_query() {
    let harness = Harness::new(sample_queries());
    harness
        .toolbar
        .context()
        .set_source_draft("{ items { id name price } }");

    harness.toolbar.save().await;

    assert_eq!(
        harness.persistence.calls(),
        vec![PersistenceCall::Update {
            id: QueryId::new("1"),
            name: "listing".to_string(),
            source: "{ items { id name price } }".to_string(),
        }]
    );
    let stored = harness.toolbar.context().find(&QueryId::new("1")).unwrap();
    assert_eq!(stored.query, "{ items { id name price } }");
    assert_eq!(harness.toast_titles(), vec!["Query updated"]);
}

#[tokio::test]
async fn test_save_keeps_stored_name_when_draft_name_empty() {
    let harness = Harness::new(sample_queries());
    harness
        .toolbar
        .context()
        .set_drafts(QueryDraft::new("", "{ items { id } }"));

    harness.toolbar.save().await;

    assert_eq!(
        harness.persistence.calls(),
        vec![PersistenceCall::Update {
            id: QueryId::new("1"),
            name: "listing".to_string(),
            source: "{ items { id } }".to_string(),
        }]
    );
    let stored = harness.toolbar.context().find(&QueryId::new("1")).unwrap();
    assert_eq!(stored.name, "listing");
}

#[tokio::test]
async fn test_save_refuses_taken_name() {
    let harness = Harness::new(sample_queries());
    harness.toolbar.context().set_name_draft("detail");

    harness.toolbar.save().await;

    assert!(harness.persistence.calls().is_empty());
    assert_eq!(harness.toast_titles(), vec!["Name is already taken"]);
    let stored = harness.toolbar.context().find(&QueryId::new("1")).unwrap();
    assert_eq!(stored.name, "listing");
}

#[tokio::test]
async fn test_save_refuses_empty_and_broken_sources() {
    let harness = Harness::new(sample_queries());

    harness.toolbar.context().set_source_draft("   \n\t");
    harness.toolbar.save().await;
    assert_eq!(harness.toast_titles(), vec!["Query can't be empty"]);

    harness.toolbar.context().set_source_draft("{ items");
    harness.toolbar.save().await;
    assert_eq!(harness.toast_titles(), vec!["Query is invalid"]);

    assert!(harness.persistence.calls().is_empty());
}

#[tokio::test]
async fn test_save_surfaces_backend_failure() {
    let harness = Harness::new(sample_queries());
    harness.persistence.fail_update();
    harness.toolbar.context().set_source_draft("{ items { id } }");

    harness.toolbar.save().await;

    assert_eq!(harness.toast_titles(), vec!["Unable to update query (duplicate)"]);
    let stored = harness.toolbar.context().find(&QueryId::new("1")).unwrap();
    assert_eq!(stored.query, "{ items { id name } }");
}

#[tokio::test]
async fn test_save_as_new_appends_and_selects() {
    let harness = Harness::new(sample_queries());
    harness.toolbar.context().set_name_draft("branched");
    harness.toolbar.context().set_source_draft("{ branched }");

    harness.toolbar.save_as_new().await;

    assert_eq!(
        harness.persistence.calls(),
        vec![PersistenceCall::Create {
            name: "branched".to_string(),
            source: "{ branched }".to_string(),
        }]
    );
    assert_eq!(harness.toolbar.context().queries().len(), 4);
    assert_eq!(
        harness.toolbar.context().current_id(),
        Some(QueryId::new("100"))
    );
    assert_eq!(harness.toast_titles(), vec!["Query created"]);
}

#[tokio::test]
async fn test_save_as_new_under_unchanged_name_is_a_collision() {
    let harness = Harness::new(sample_queries());
    harness.toolbar.context().set_source_draft("{ items { id } }");

    // The empty name draft falls back to "listing", which the selected
    // query itself still holds
    harness.toolbar.save_as_new().await;

    assert!(harness.persistence.calls().is_empty());
    assert_eq!(harness.toast_titles(), vec!["Name is already taken"]);
    assert_eq!(harness.toolbar.context().queries().len(), 3);
}

#[tokio::test]
async fn test_save_as_new_from_blank_state() {
    let harness = Harness::new(Vec::new());
    harness.toolbar.new_query();
    harness.toolbar.context().set_source_draft("{ first }");

    harness.toolbar.save_as_new().await;

    let queries = harness.toolbar.context().queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].name, "New Query");
    assert_eq!(
        harness.toolbar.context().current_id(),
        Some(queries[0].id.clone())
    );
}

#[tokio::test]
async fn test_request_delete_stages_without_removing() {
    let mut harness = Harness::new(sample_queries());

    harness.toolbar.request_delete().await;

    assert_eq!(harness.toolbar.pending_delete(), Some(QueryId::new("1")));
    assert_eq!(harness.toolbar.context().queries().len(), 3);
    assert_eq!(harness.toolbar.context().current_id(), Some(QueryId::new("2")));
    assert_eq!(harness.toolbar.context().drafts().name, "detail");
    assert!(harness.persistence.calls().is_empty());

    let toasts = harness.toasts.drain();
    assert_eq!(toasts.len(), 1);
    let toast = &toasts[0];
    assert_eq!(toast.title, "Query successfully deleted");
    assert_eq!(toast.severity, ToastSeverity::Success);
    assert_eq!(toast.duration, Duration::from_millis(5000));
    let action = toast.action.as_ref().unwrap();
    assert_eq!(action.label, "Undo");
    assert_eq!(action.command, ToolbarCommand::UndoDelete);
    assert_eq!(toast.on_close, Some(ToolbarCommand::ConfirmDelete));
}

#[tokio::test]
async fn test_undo_restores_selection_without_backend_call() {
    let mut harness = Harness::new(sample_queries());
    harness.toolbar.request_delete().await;

    harness.toolbar.run_command(ToolbarCommand::UndoDelete).await;

    assert_eq!(harness.toolbar.pending_delete(), None);
    assert_eq!(harness.toolbar.context().current_id(), Some(QueryId::new("1")));
    assert_eq!(harness.toolbar.context().queries().len(), 3);
    assert!(harness.persistence.calls().is_empty());
    assert_eq!(harness.toolbar.context().drafts().name, "listing");
}

#[tokio::test]
async fn test_confirm_commits_exactly_once() {
    let mut harness = Harness::new(sample_queries());
    harness.toolbar.request_delete().await;

    harness
        .toolbar
        .run_command(ToolbarCommand::ConfirmDelete)
        .await;

    assert_eq!(harness.toolbar.context().queries().len(), 2);
    assert_eq!(
        harness.persistence.calls(),
        vec![PersistenceCall::Delete {
            id: QueryId::new("1")
        }]
    );

    // Toast close fires after an explicit confirm too; it must be inert
    harness
        .toolbar
        .run_command(ToolbarCommand::ConfirmDelete)
        .await;
    assert_eq!(harness.persistence.calls().len(), 1);
    assert_eq!(harness.toolbar.context().queries().len(), 2);
}

#[tokio::test]
async fn test_second_delete_request_commits_the_first() {
    let mut harness = Harness::new(sample_queries());

    harness.toolbar.request_delete().await;
    assert_eq!(harness.toolbar.pending_delete(), Some(QueryId::new("1")));

    // Selection moved to "2"; deleting again stages it and flushes "1"
    harness.toolbar.request_delete().await;

    assert_eq!(harness.toolbar.pending_delete(), Some(QueryId::new("2")));
    assert_eq!(
        harness.persistence.calls(),
        vec![PersistenceCall::Delete {
            id: QueryId::new("1")
        }]
    );
    assert_eq!(harness.toolbar.context().queries().len(), 2);
    assert_eq!(harness.toolbar.context().current_id(), Some(QueryId::new("3")));
}

#[tokio::test]
async fn test_default_query_cannot_be_deleted() {
    let queries = vec![
        SavedQuery::new("1", "listing", "{ items { id name } }").with_default(true),
        SavedQuery::new("2", "detail", "{ item(id: 1) { id name } }"),
    ];
    let mut harness = Harness::new(queries);

    harness.toolbar.request_delete().await;

    assert_eq!(harness.toolbar.pending_delete(), None);
    assert_eq!(harness.toolbar.context().queries().len(), 2);
    assert_eq!(harness.toolbar.context().current_id(), Some(QueryId::new("1")));
    assert!(harness.persistence.calls().is_empty());
    assert_eq!(harness.toast_titles(), vec!["Default query can't be deleted"]);
}

#[tokio::test]
async fn test_share_copies_link_for_selected_query() {
    let harness = Harness::new(sample_queries());

    harness.toolbar.share().unwrap();

    assert_eq!(
        harness.clipboard.last_text().as_deref(),
        Some("http://localhost/playground?playgroundQuery=1")
    );
    assert_eq!(harness.toast_titles(), vec!["URL copied to clipboard"]);
}

#[tokio::test]
async fn test_share_without_selection_is_a_noop() {
    let harness = Harness::new(Vec::new());

    harness.toolbar.share().unwrap();

    assert_eq!(harness.clipboard.last_text(), None);
    assert!(harness.toast_titles().is_empty());
}

#[tokio::test]
async fn test_set_default_moves_the_flag() {
    let queries = vec![
        SavedQuery::new("1", "listing", "{ items { id name } }"),
        SavedQuery::new("2", "detail", "{ item(id: 1) { id name } }").with_default(true),
        SavedQuery::new("3", "search", "{ search(term: \"x\") { id } }"),
    ];
    let mut harness = Harness::new(queries);
    harness.toolbar.select(Some(QueryId::new("3")));

    harness.toolbar.set_as_default().await;

    assert_eq!(
        harness.persistence.calls(),
        vec![PersistenceCall::SetDefault {
            id: QueryId::new("3")
        }]
    );
    let defaults: Vec<bool> = harness
        .toolbar
        .context()
        .queries()
        .iter()
        .map(|q| q.is_default)
        .collect();
    assert_eq!(defaults, vec![false, false, true]);
    assert_eq!(harness.toast_titles(), vec!["Default query set"]);
}

#[tokio::test]
async fn test_set_default_failure_leaves_flags_alone() {
    let queries = vec![
        SavedQuery::new("1", "listing", "{ items { id name } }").with_default(true),
        SavedQuery::new("2", "detail", "{ item(id: 1) { id name } }"),
    ];
    let mut harness = Harness::new(queries);
    harness.persistence.fail_set_default();
    harness.toolbar.select(Some(QueryId::new("2")));

    harness.toolbar.set_as_default().await;

    let defaults: Vec<bool> = harness
        .toolbar
        .context()
        .queries()
        .iter()
        .map(|q| q.is_default)
        .collect();
    assert_eq!(defaults, vec![true, false]);
    assert_eq!(harness.toast_titles(), vec!["Unable to set the default query"]);
}

#[tokio::test]
async fn test_new_query_clears_selection_and_keeps_source() {
    let mut harness = Harness::new(sample_queries());

    harness
        .toolbar
        .handle_action(QueryAction::NewQuery)
        .await
        .unwrap();

    assert_eq!(harness.toolbar.context().current_id(), None);
    let drafts = harness.toolbar.context().drafts();
    assert_eq!(drafts.name, NEW_QUERY_NAME);
    assert_eq!(drafts.source, "{ items { id name } }");
    assert_eq!(harness.toolbar.context().queries().len(), 3);
}

#[tokio::test]
async fn test_cancel_reloads_drafts_from_selection() {
    let harness = Harness::new(sample_queries());
    harness.toolbar.context().set_name_draft("scratch");
    harness.toolbar.context().set_source_draft("{ scratch }");

    harness.toolbar.cancel();

    let drafts = harness.toolbar.context().drafts();
    assert_eq!(drafts.name, "listing");
    assert_eq!(drafts.source, "{ items { id name } }");
}

#[tokio::test]
async fn test_enablement_follows_draft_drift() {
    let harness = Harness::new(sample_queries());

    assert!(!harness.toolbar.can_save());
    assert!(!harness.toolbar.can_reset());
    assert!(!harness.toolbar.can_save_as_new());

    harness.toolbar.context().set_source_draft("{ items { id } }");
    assert!(harness.toolbar.can_save());
    assert!(harness.toolbar.can_reset());
    assert!(!harness.toolbar.can_save_as_new());

    harness.toolbar.context().set_name_draft("branched");
    assert!(harness.toolbar.can_save_as_new());

    harness.toolbar.context().set_name_draft("");
    assert!(!harness.toolbar.can_save_as_new());
}
