use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::use_cases::ports::EditorSurface;

/// Editor surface held in memory, for demos and tests
pub struct MemoryEditor {
    source: watch::Sender<String>,
    syntax_errors: AtomicBool,
}

impl MemoryEditor {
    pub fn new(source: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(source.into());
        Self {
            source: sender,
            syntax_errors: AtomicBool::new(false),
        }
    }

    /// Flip the diagnostics flag the surface reports
    pub fn set_syntax_errors(&self, has_errors: bool) {
        self.syntax_errors.store(has_errors, Ordering::SeqCst);
    }

    /// Simulate the user typing into the editor
    pub fn edit(&self, source: impl Into<String>) {
        self.source.send_replace(source.into());
    }
}

impl Default for MemoryEditor {
    fn default() -> Self {
        Self::new("")
    }
}

impl EditorSurface for MemoryEditor {
    fn source(&self) -> String {
        self.source.borrow().clone()
    }

    fn set_source(&self, source: &str) {
        self.source.send_replace(source.to_string());
    }

    fn subscribe(&self) -> watch::Receiver<String> {
        self.source.subscribe()
    }

    fn has_syntax_errors(&self) -> bool {
        self.syntax_errors.load(Ordering::SeqCst)
    }
}
