//! GraphQL Playground Shell
//!
//! Wires a query editor surface, an HTTP fetcher and the saved-queries
//! toolbar into one embeddable playground. The shell keeps the editor
//! and the selected query's draft in lockstep, validates outgoing
//! requests before they hit the wire, and leaves rendering entirely to
//! the embedder.
//!
//! # Example
//!
//! ```rust
//! use graphql_playground_shell::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let editor = Arc::new(MemoryEditor::default());
//!     let persistence = Arc::new(InMemoryPersistence::with_queries(vec![
//!         SavedQuery::new("1", "listing", "{ items { id } }"),
//!     ]));
//!
//!     let mut playground = PlaygroundBuilder::new()
//!         .editor(editor.clone())
//!         .persistence(persistence.clone())
//!         .queries(persistence.queries())
//!         .fetcher_options(FetcherOptions::new(
//!             url::Url::parse("http://localhost:4000/graphql")?,
//!         ))
//!         .build()?;
//!
//!     playground.start().await;
//!
//!     // The editor now shows the selected query
//!     assert_eq!(editor.source(), "{ items { id } }");
//!     Ok(())
//! }
//! ```

mod adapters;
pub mod entities;
pub mod error;
pub mod use_cases;

pub use error::ShellError;

pub use adapters::gateways::MemoryEditor;

#[cfg(feature = "reqwest")]
pub use adapters::gateways::Reqwest;

/// Default storage implementation using a thread-safe map
pub struct DefaultStorage {
    items: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl DefaultStorage {
    pub fn new() -> Self {
        Self {
            items: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }
}

impl Default for DefaultStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl use_cases::ports::EditorStorage for DefaultStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .ok()
            .and_then(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entities::{FetcherOptions, GraphQLRequest};
    pub use crate::error::ShellError;
    pub use crate::use_cases::ports::{EditorStorage, EditorSurface, Fetcher};
    pub use crate::use_cases::{
        Playground, PlaygroundBuilder, ValidatingFetcher, INTROSPECTION_OPERATION,
    };
    pub use crate::DefaultStorage;
    pub use crate::MemoryEditor;

    #[cfg(feature = "reqwest")]
    pub use crate::Reqwest;

    pub use saved_queries_toolbar::prelude::*;
}
