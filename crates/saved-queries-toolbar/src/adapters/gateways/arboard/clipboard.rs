use std::sync::Mutex;

use crate::error::ToolbarError;
use crate::use_cases::ports::Clipboard;

/// System clipboard backed by arboard.
///
/// The native handle is not Sync, so it sits behind a mutex.
pub struct Arboard {
    clipboard: Mutex<arboard::Clipboard>,
}

impl Arboard {
    pub fn new() -> Result<Self, ToolbarError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ToolbarError::ClipboardError(e.to_string()))?;
        Ok(Self {
            clipboard: Mutex::new(clipboard),
        })
    }
}

impl Clipboard for Arboard {
    fn write_text(&self, text: &str) -> Result<(), ToolbarError> {
        let mut clipboard = self
            .clipboard
            .lock()
            .map_err(|_| ToolbarError::ClipboardError("clipboard lock poisoned".to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ToolbarError::ClipboardError(e.to_string()))
    }
}
