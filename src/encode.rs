//! Asset encoding: file bytes to embeddable base64 data URLs.

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use futures::future;

use crate::error::{Error, Result};
use crate::profile::{Assets, EncodedAssets};

/// A `data:<mime>;base64,<payload>` string holding a file's bytes.
///
/// Embeddable directly in HTML attributes, so the generated document carries
/// its assets inline and needs no separate fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encode raw bytes under the given MIME type.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
    }

    /// The full `data:` URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The MIME type recorded in the URL prefix.
    pub fn mime(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }

    /// Decode the payload back into the original bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataUrl`] if the URL has no payload separator or the
    /// payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let (_, payload) = self
            .0
            .split_once(',')
            .ok_or_else(|| Error::DataUrl("missing ',' separator".into()))?;
        BASE64
            .decode(payload)
            .map_err(|e| Error::DataUrl(e.to_string()))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read one file and encode it as a data URL.
///
/// The MIME type is derived from the file extension; unknown extensions fall
/// back to `application/octet-stream`.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read.
pub async fn data_url(path: &Path) -> Result<DataUrl> {
    let bytes = tokio::fs::read(path).await.map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("encoded {} ({} bytes)", path.display(), bytes.len());
    Ok(DataUrl::from_bytes(mime_for(path), &bytes))
}

/// Encode the three required uploads concurrently.
///
/// All three reads run at once and the pipeline waits for all of them; if
/// any single read fails the whole operation fails and no partial set is
/// returned. No retry is attempted.
pub async fn encode_assets(assets: &Assets) -> Result<EncodedAssets> {
    let (photo, resume, background) = future::try_join3(
        data_url(&assets.photo),
        data_url(&assets.resume),
        data_url(&assets.background),
    )
    .await?;
    Ok(EncodedAssets {
        photo,
        resume,
        background,
    })
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("html") | Some("htm") => "text/html",
        _ => "application/octet-stream",
    }
}
