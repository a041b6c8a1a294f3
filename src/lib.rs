//! # pdf-outline
//!
//! Infers a navigable outline from a PDF: a document title plus H1/H2/H3
//! headings with 1-based page numbers. Intended for indexing and
//! navigation tools that need structure when a document carries no
//! reliable embedded bookmark tree.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_outline::{extract_outline, render, JsonFormat};
//!
//! let doc = extract_outline("paper.pdf");
//! println!("{}", doc.title);
//! for entry in &doc.outline {
//!     println!("{} {} (p. {})", entry.level, entry.text, entry.page);
//! }
//! let json = render::to_json(&doc, JsonFormat::Pretty).unwrap();
//! ```
//!
//! ## How it works
//!
//! - A rich backend (`pdf-extract`) is tried first; it provides per-glyph
//!   font sizes alongside page text.
//! - If the rich backend cannot open the document, the whole document is
//!   reprocessed under a plain `lopdf` backend with a reduced rule set.
//! - Heading levels come from an ordered rule cascade over trimmed lines:
//!   numbered sections, chapter keywords, all-caps, title case, Roman
//!   numerals, lettered sections.
//! - Extraction never fails: unreadable input yields a [`Document`] with
//!   its `error` field set.

pub mod detect;
pub mod error;
pub mod model;
pub mod outline;
pub mod pipeline;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use model::{Document, HeadingEntry, HeadingLevel};
pub use pipeline::{ExtractOptions, ExtractionPipeline};
pub use render::JsonFormat;

use std::path::Path;

/// Extract an outline from a PDF file.
///
/// Never returns an error: read or parse failures produce a [`Document`]
/// with `error` set and an empty outline.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::extract_outline;
///
/// let doc = extract_outline("document.pdf");
/// assert!(doc.error.is_none());
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Document {
    ExtractionPipeline::new().extract_path(path)
}

/// Extract an outline from a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::{extract_outline_with_options, ExtractOptions};
/// use std::time::Duration;
///
/// let options = ExtractOptions::new().with_deadline(Duration::from_secs(30));
/// let doc = extract_outline_with_options("document.pdf", options);
/// ```
pub fn extract_outline_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Document {
    ExtractionPipeline::with_options(options).extract_path(path)
}

/// Extract an outline from PDF bytes already in memory.
pub fn extract_outline_from_bytes(data: &[u8]) -> Document {
    ExtractionPipeline::new().extract_bytes(data)
}
