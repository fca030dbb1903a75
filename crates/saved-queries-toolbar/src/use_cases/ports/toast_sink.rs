use crate::entities::ToastMessage;

/// Receiver for toolbar notifications.
///
/// A UI shell renders these as snackbars; tests collect them and assert
/// on titles and actions.
pub trait ToastSink: Send + Sync {
    fn push(&self, toast: ToastMessage);
}
