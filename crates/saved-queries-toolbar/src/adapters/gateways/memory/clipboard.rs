use std::sync::Mutex;

use crate::error::ToolbarError;
use crate::use_cases::ports::Clipboard;

/// Clipboard keeping the last written text in memory
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            text: Mutex::new(None),
        }
    }

    /// The most recently written text
    pub fn last_text(&self) -> Option<String> {
        self.text.lock().ok().and_then(|text| text.clone())
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ToolbarError> {
        if let Ok(mut slot) = self.text.lock() {
            *slot = Some(text.to_string());
        }
        Ok(())
    }
}
