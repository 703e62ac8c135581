//! System clipboard hand-off.
//!
//! A successful write leaves the clipboard's plain-text slot equal to
//! exactly the given string; `arboard` clears the previous owner's
//! content as part of the transfer. Failures are reported to the
//! caller and are expected to be non-fatal there.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The OS would not hand over the clipboard (held by another
    /// process, or no display connection).
    #[error("failed to access clipboard: {0}")]
    Unavailable(arboard::Error),
    /// The clipboard was acquired but the text transfer failed.
    #[error("failed to copy text to clipboard: {0}")]
    WriteFailed(arboard::Error),
}

pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard
        .set_text(text)
        .map_err(ClipboardError::WriteFailed)?;
    Ok(())
}
