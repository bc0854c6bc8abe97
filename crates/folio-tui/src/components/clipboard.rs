//! System clipboard access.

use std::fmt;

use arboard::Clipboard;

/// Clipboard-specific error type.
#[derive(Debug, Clone)]
pub struct ClipboardError(pub String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// Copy text to system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| ClipboardError(format!("Failed to access clipboard: {}", e)))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError(format!("Failed to copy: {}", e)))
}
