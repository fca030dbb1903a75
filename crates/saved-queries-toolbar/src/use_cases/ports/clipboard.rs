use crate::error::ToolbarError;

/// Writable clipboard for the share action
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ToolbarError>;
}
