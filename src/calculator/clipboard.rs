//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Copy(arboard::Error),
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_message_not_repeated_by_source() {
        let err = ClipboardError::Access(arboard::Error::ClipboardNotSupported);
        assert!(err.to_string().starts_with("failed to access clipboard: "));
        assert!(err.source().is_none());
    }
}
