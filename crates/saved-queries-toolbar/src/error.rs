use thiserror::Error;

/// Errors surfaced by toolbar operations and their collaborators
#[derive(Error, Debug)]
pub enum ToolbarError {
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
