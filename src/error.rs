//! Error types for folio-gen.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for folio-gen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or presenting a portfolio.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field or file selection is missing.
    ///
    /// Detected synchronously before any file is read; generation aborts
    /// with no side effects.
    #[error("missing required input '{0}'; complete all fields and select the photo, resume, and background files")]
    MissingInput(&'static str),

    /// Reading one of the selected files failed. Generation is
    /// all-or-nothing; no partial document is produced.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Export configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A data URL payload could not be decoded.
    #[error("malformed data URL: {0}")]
    DataUrl(String),

    /// I/O error while writing or presenting the document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
