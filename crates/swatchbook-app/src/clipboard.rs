//! System clipboard access (native builds only).

use crate::error::{AppError, AppResult};

/// Copy text to the system clipboard.
#[cfg(feature = "native")]
pub fn copy_text(text: &str) -> AppResult<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {}", e)))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| AppError::Clipboard(format!("Failed to copy to clipboard: {}", e)))?;
    log::info!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(not(feature = "native"))]
pub fn copy_text(_text: &str) -> AppResult<()> {
    Err(AppError::Clipboard("Clipboard support not enabled. Build with the `native` feature".to_string()))
}
