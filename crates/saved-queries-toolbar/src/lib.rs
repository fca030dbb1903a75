//! Saved Queries Toolbar
//!
//! The state machine behind a GraphQL playground's saved-queries toolbar:
//! a collection of named queries, one selection, draft buffers shadowing
//! the editors, and the workflows a toolbar offers on top (save, save as
//! new, share, set default, delete with an undo window).
//!
//! # Example
//!
//! ```rust
//! use saved_queries_toolbar::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ToolbarError> {
//!     let persistence = Arc::new(InMemoryPersistence::with_queries(vec![
//!         SavedQuery::new("1", "listing", "{ items }"),
//!     ]));
//!     let toasts = Arc::new(DefaultToastSink::new());
//!
//!     let mut toolbar = SavedQueriesToolbar::builder()
//!         .persistence(persistence.clone())
//!         .toast_sink(toasts.clone())
//!         .build()?;
//!
//!     toolbar.initialize(persistence.queries());
//!
//!     toolbar.context().set_name_draft("detail");
//!     toolbar.context().set_source_draft("{ item { id } }");
//!     toolbar.save_as_new().await;
//!
//!     for toast in toasts.drain() {
//!         println!("{}", toast.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod adapters;
pub mod context;
pub mod entities;
pub mod error;
pub mod use_cases;

pub use error::ToolbarError;

pub use adapters::gateways::{
    InMemoryPersistence, MemoryAddressBar, MemoryClipboard, PermissiveOracle,
};

#[cfg(feature = "apollo-parser")]
pub use adapters::gateways::ApolloParser;

#[cfg(feature = "arboard")]
pub use adapters::gateways::Arboard;

/// Default toast sink implementation using a thread-safe vector
pub struct DefaultToastSink {
    toasts: std::sync::Mutex<Vec<entities::ToastMessage>>,
}

impl DefaultToastSink {
    pub fn new() -> Self {
        Self {
            toasts: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Take every toast collected so far
    pub fn drain(&self) -> Vec<entities::ToastMessage> {
        match self.toasts.lock() {
            Ok(mut toasts) => toasts.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for DefaultToastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl use_cases::ports::ToastSink for DefaultToastSink {
    fn push(&self, toast: entities::ToastMessage) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::SavedQueriesHandle;
    pub use crate::entities::{
        QueryDraft, QueryId, SavedQueriesAction, SavedQueriesState, SavedQuery, SavedQueryPatch,
        SnackbarNotice, ToastAction, ToastMessage, ToastSeverity, ToolbarCommand,
    };
    pub use crate::error::ToolbarError;
    pub use crate::use_cases::ports::{
        AddressBar, Clipboard, QueryPersistence, QueryValidityOracle, ToastSink,
    };
    pub use crate::use_cases::{
        QueryAction, SavedQueriesToolbar, ToolbarBuilder, ToolbarOptions, NEW_QUERY_NAME,
    };
    pub use crate::DefaultToastSink;
    pub use crate::{InMemoryPersistence, MemoryAddressBar, MemoryClipboard, PermissiveOracle};

    #[cfg(feature = "apollo-parser")]
    pub use crate::ApolloParser;

    #[cfg(feature = "arboard")]
    pub use crate::Arboard;
}
