//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)?;

    tracing::debug!(len = text.len(), "copied result to clipboard");
    Ok(())
}
