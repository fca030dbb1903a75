//! Simple example demonstrating basic usage of saved-queries-toolbar
//!
//! This example shows how to:
//! - Build a toolbar around an in-memory persistence backend
//! - Honor a shared-query link found in the address bar
//! - Edit drafts, save them, and branch them off as a new query
//! - Stage a delete and undo it through the toast command

use saved_queries_toolbar::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), ToolbarError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Seed a backend with a couple of queries
    let persistence = Arc::new(InMemoryPersistence::with_queries(vec![
        SavedQuery::new("1", "listing", "{ items { id name } }"),
        SavedQuery::new("2", "detail", "{ item(id: 1) { id name } }"),
    ]));
    let toasts = Arc::new(DefaultToastSink::new());
    let clipboard = Arc::new(MemoryClipboard::new());

    // Pretend the page was opened through a sharing link
    let address_bar =
        Arc::new(MemoryAddressBar::parse("http://localhost/playground?playgroundQuery=2").unwrap());

    let mut toolbar = SavedQueriesToolbar::builder()
        .persistence(persistence.clone())
        .toast_sink(toasts.clone())
        .clipboard(clipboard.clone())
        .address_bar(address_bar)
        .build()?;

    // The sharing link wins the initial selection
    toolbar.initialize(persistence.queries());
    println!("Selected after init: {:?}", toolbar.context().current_id());

    // Edit the source draft and save over the selected query
    println!("\n=== Saving the selected query ===");
    toolbar
        .context()
        .set_source_draft("{ item(id: 1) { id name price } }");
    println!("Save enabled: {}", toolbar.can_save());
    toolbar.save().await;

    // Branch the edit off as a new query instead
    println!("\n=== Saving as a new query ===");
    toolbar.context().set_name_draft("detail with price");
    toolbar.save_as_new().await;
    let names: Vec<String> = toolbar
        .context()
        .queries()
        .iter()
        .map(|q| q.name.clone())
        .collect();
    println!("Queries: {:?}", names);
    println!("Selected: {:?}", toolbar.context().current_id());

    // Copy a sharing link for the freshly created query
    println!("\n=== Sharing ===");
    toolbar.share()?;
    println!("Clipboard: {:?}", clipboard.last_text());

    // Stage a delete, then change our mind
    println!("\n=== Delete with undo ===");
    toolbar.request_delete().await;
    println!("Pending delete: {:?}", toolbar.pending_delete());
    println!("Selected while pending: {:?}", toolbar.context().current_id());
    toolbar.run_command(ToolbarCommand::UndoDelete).await;
    println!("Selected after undo: {:?}", toolbar.context().current_id());

    // Print every toast raised along the way
    println!("\n=== Toasts ===");
    for toast in toasts.drain() {
        println!("[{:?}] {}", toast.severity, toast.title);
    }

    Ok(())
}
