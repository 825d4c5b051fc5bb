//! Copying results to the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;

use super::evaluation::CalcResult;

/// Put the raw value of a successful result on the clipboard.
///
/// Error results carry nothing worth copying; returns `Ok(false)` for them
/// without touching the clipboard.
pub fn copy_result(result: &CalcResult) -> Result<bool> {
    let Some(text) = result.clipboard() else {
        tracing::debug!(expression = result.expression(), "nothing to copy");
        return Ok(false);
    };

    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text)
        .with_context(|| format!("Could not copy {text} for {}", result.expression()))?;
    tracing::debug!(text, "copied result");
    Ok(true)
}
