//! Text sources: backends that turn PDF bytes into per-page text.
//!
//! The pipeline prefers the rich backend, which can also report per-glyph
//! font sizes, and falls back to the plain backend when the rich one
//! cannot open the document.

mod plain;
mod rich;

pub use plain::PlainSource;
pub use rich::RichSource;

use crate::error::Result;

/// A single positioned character's style information.
///
/// Only the effective font size is carried; geometry is not needed for
/// outline inference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// Font size in points.
    pub size: f32,
}

/// Page-oriented access to a parsed document.
///
/// Implementations isolate failures per page: an error from
/// [`page_text`](PageTextSource::page_text) affects only that page.
pub trait PageTextSource {
    /// 1-based page numbers, in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extracted text for one page.
    fn page_text(&self, page: u32) -> Result<String>;

    /// Per-glyph font sizes for one page, or `Ok(None)` when the
    /// backend cannot report style information.
    fn page_glyphs(&self, page: u32) -> Result<Option<Vec<Glyph>>>;

    /// Title from the document info dictionary, when available.
    fn metadata_title(&self) -> Option<String>;
}
