use thiserror::Error;

use saved_queries_toolbar::ToolbarError;

/// Errors surfaced by the playground shell and its collaborators
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Fetcher error: {0}")]
    FetcherError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Toolbar error: {0}")]
    ToolbarError(#[from] ToolbarError),
}
