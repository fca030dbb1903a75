//! Simple example demonstrating basic usage of graphql-playground-shell
//!
//! This example shows how to:
//! - Assemble a playground from an editor surface, a fetcher and a backend
//! - Let the pumps mirror editor keystrokes into the selected query's draft
//! - Run requests through syntax validation before they reach the fetcher
//! - Save an edited query back to the backend

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use graphql_playground_shell::prelude::*;
use serde_json::{json, Value};

/// Fetcher that answers every request with an echo of its query
struct EchoFetcher;

#[async_trait]
impl Fetcher for EchoFetcher {
    async fn fetch(&self, request: GraphQLRequest) -> Result<Value, ShellError> {
        Ok(json!({ "data": { "echo": request.query } }))
    }
}

#[tokio::main]
async fn main() -> Result<(), ShellError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let editor = Arc::new(MemoryEditor::default());
    let toasts = Arc::new(DefaultToastSink::new());
    let persistence = Arc::new(InMemoryPersistence::with_queries(vec![
        SavedQuery::new("1", "listing", "{ items { id name } }"),
        SavedQuery::new("2", "detail", "{ item(id: 1) { id name } }").with_default(true),
    ]));

    let mut playground = Playground::builder()
        .editor(editor.clone())
        .persistence(persistence.clone())
        .queries(persistence.queries())
        .fetcher(Arc::new(EchoFetcher))
        .toast_sink(toasts.clone())
        .build()?;

    // Loading selects the default query and hydrates the editor
    playground.start().await;
    println!("Editor after start: {}", editor.source());

    // Type into the editor and wait for the pump to mirror it
    println!("\n=== Editing ===");
    let edited = "{ item(id: 1) { id name price } }";
    editor.edit(edited);
    for _ in 0..100 {
        if playground.context().drafts().source == edited {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    println!("Draft: {}", playground.context().drafts().source);
    println!("Save enabled: {}", playground.toolbar().can_save());

    // A valid request passes validation and reaches the fetcher
    println!("\n=== Fetching ===");
    let response = playground.fetch(GraphQLRequest::new(edited)).await?;
    println!("Response: {response}");

    // A broken one is answered locally with a GraphQL error payload
    let broken = playground.fetch(GraphQLRequest::new("{ item(id: 1")).await?;
    println!("Broken query response: {broken}");

    // Persist the edit back to the selected query
    println!("\n=== Saving ===");
    playground.toolbar().save().await;
    let stored = persistence
        .queries()
        .into_iter()
        .find(|query| query.name == "detail")
        .map(|query| query.query);
    println!("Stored source: {stored:?}");

    println!("\n=== Toasts ===");
    for toast in toasts.drain() {
        println!("[{:?}] {}", toast.severity, toast.title);
    }

    Ok(())
}
