mod draft;
mod saved_query;
mod state;
mod toast;

pub use draft::QueryDraft;
pub use saved_query::{QueryId, SavedQuery};
pub use state::{saved_queries_reducer, SavedQueriesAction, SavedQueriesState, SavedQueryPatch};
pub use toast::{
    SnackbarNotice, ToastAction, ToastMessage, ToastSeverity, ToolbarCommand,
    DELETE_TOAST_DURATION, TOAST_DURATION,
};
