// sigcraft/src/utils/clipboard.rs
//! System clipboard access, available with the `clipboard` feature.

use anyhow::Result;

/// Puts `html` on the clipboard as rich text so it pastes as a formatted signature.
#[cfg(feature = "clipboard")]
pub fn copy_html_to_clipboard(html: &str) -> Result<()> {
    use anyhow::Context;

    let mut clipboard = arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    clipboard
        .set_html(html, None)
        .context("Failed to place HTML on the clipboard")?;
    log::debug!("Copied {} bytes of HTML to the clipboard.", html.len());
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_html_to_clipboard(_html: &str) -> Result<()> {
    anyhow::bail!("Clipboard support is not enabled in this build (feature 'clipboard').")
}
