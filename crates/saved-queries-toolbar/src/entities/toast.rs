use std::time::Duration;

/// How long a toast stays on screen by default
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Longer window for the delete toast so the undo affordance is reachable
pub const DELETE_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Visual severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

/// Commands a toast surface feeds back into the toolbar.
///
/// Toasts carry data, not callbacks, so they stay inert values that any
/// surface can render and any test can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    /// Reinstate the pending delete and reselect the query
    UndoDelete,
    /// Commit the pending delete without waiting for the toast to expire
    ConfirmDelete,
}

/// Optional action button on a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    pub label: &'static str,
    pub command: ToolbarCommand,
}

/// A fully resolved toast, ready for a surface to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: &'static str,
    pub severity: ToastSeverity,
    pub action: Option<ToastAction>,
    /// Command to run when the toast closes without its action being taken
    pub on_close: Option<ToolbarCommand>,
    pub duration: Duration,
}

/// Every notice the toolbar can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarNotice {
    QueryCreated,
    QueryUpdated,
    DefaultQuerySet,
    UrlCopied,
    QueryDeleted,
    NameEmpty,
    NameTaken,
    QueryEmpty,
    QueryInvalid,
    CreateFailed,
    UpdateFailed,
    SetDefaultFailed,
    DefaultQueryUndeletable,
}

impl SnackbarNotice {
    pub fn title(&self) -> &'static str {
        match self {
            SnackbarNotice::QueryCreated => "Query created",
            SnackbarNotice::QueryUpdated => "Query updated",
            SnackbarNotice::DefaultQuerySet => "Default query set",
            SnackbarNotice::UrlCopied => "URL copied to clipboard",
            SnackbarNotice::QueryDeleted => "Query successfully deleted",
            SnackbarNotice::NameEmpty => "Name can't be empty",
            SnackbarNotice::NameTaken => "Name is already taken",
            SnackbarNotice::QueryEmpty => "Query can't be empty",
            SnackbarNotice::QueryInvalid => "Query is invalid",
            SnackbarNotice::CreateFailed => "Unable to create query (duplicate)",
            SnackbarNotice::UpdateFailed => "Unable to update query (duplicate)",
            SnackbarNotice::SetDefaultFailed => "Unable to set the default query",
            SnackbarNotice::DefaultQueryUndeletable => "Default query can't be deleted",
        }
    }

    pub fn severity(&self) -> ToastSeverity {
        match self {
            SnackbarNotice::QueryCreated
            | SnackbarNotice::QueryUpdated
            | SnackbarNotice::DefaultQuerySet
            | SnackbarNotice::UrlCopied
            | SnackbarNotice::QueryDeleted => ToastSeverity::Success,
            SnackbarNotice::NameEmpty
            | SnackbarNotice::NameTaken
            | SnackbarNotice::QueryEmpty
            | SnackbarNotice::QueryInvalid
            | SnackbarNotice::CreateFailed
            | SnackbarNotice::UpdateFailed
            | SnackbarNotice::SetDefaultFailed
            | SnackbarNotice::DefaultQueryUndeletable => ToastSeverity::Error,
        }
    }

    /// Resolve the notice into a displayable toast.
    ///
    /// The delete notice is the only one carrying an action: its undo
    /// button reinstates the query, and closing it commits the delete.
    pub fn to_toast_message(&self) -> ToastMessage {
        match self {
            SnackbarNotice::QueryDeleted => ToastMessage {
                title: self.title(),
                severity: self.severity(),
                action: Some(ToastAction {
                    label: "Undo",
                    command: ToolbarCommand::UndoDelete,
                }),
                on_close: Some(ToolbarCommand::ConfirmDelete),
                duration: DELETE_TOAST_DURATION,
            },
            _ => ToastMessage {
                title: self.title(),
                severity: self.severity(),
                action: None,
                on_close: None,
                duration: TOAST_DURATION,
            },
        }
    }
}
