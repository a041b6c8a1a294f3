//! Error types for the outline extraction engine.

use std::io;
use thiserror::Error;

/// Result type alias for pdf-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
///
/// All of these are recovered inside the extraction pipeline; the
/// top-level API always hands back a [`crate::Document`], never an `Err`.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The PDF document is encrypted and cannot be processed.
    #[error("Document is encrypted")]
    Encrypted,

    /// A backend failed to open the whole document.
    #[error("Backend failed to open document: {0}")]
    BackendOpen(String),

    /// Extraction failed for a single page.
    #[error("Page {page}: {reason}")]
    PageExtract { page: u32, reason: String },

    /// Error serializing the result document.
    #[error("Rendering error: {0}")]
    Render(String),
}
