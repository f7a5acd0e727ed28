//! Presentation: write the generated document and open it in a browser.
//!
//! The opened browsing context is not tracked afterwards; each generation
//! run produces a fresh, independent page.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Result;

/// Write the document to a temp file and open it in the default browser.
///
/// Returns the path that was opened. The file outlives the process so the
/// browser can keep reading it.
pub fn open(html: &str) -> Result<PathBuf> {
    let path = write_temp(html)?;
    launch(&path)?;
    Ok(path)
}

/// Write the document to a persistent `.html` temp file.
pub fn write_temp(html: &str) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("folio-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(html.as_bytes())?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    log::debug!("wrote {} bytes to {}", html.len(), path.display());
    Ok(path)
}

/// Open a file in the platform's default browser.
pub fn launch(path: &Path) -> Result<()> {
    log::info!("opening {}", path.display());

    #[cfg(target_os = "macos")]
    let status = Command::new("open").arg(path).status()?;

    #[cfg(target_os = "windows")]
    let status = Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .status()?;

    #[cfg(all(unix, not(target_os = "macos")))]
    let status = Command::new("xdg-open").arg(path).status()?;

    if !status.success() {
        log::warn!("browser launcher exited with {status}");
    }
    Ok(())
}
