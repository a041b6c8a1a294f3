//! Rich backend built on `pdf-extract`.
//!
//! Provides per-page text through [`PlainTextOutput`] and per-glyph font
//! sizes through a minimal [`OutputDev`] implementation that records only
//! the style information the outline rules consume.

use crate::detect;
use crate::error::{Error, Result};
use crate::source::{Glyph, PageTextSource};
use pdf_extract::{output_doc_page, MediaBox, OutputDev, OutputError, PlainTextOutput, Transform};

/// Style-aware text source. Fails to open on encrypted or malformed
/// documents; the pipeline then falls back to [`PlainSource`].
///
/// [`PlainSource`]: crate::source::PlainSource
pub struct RichSource {
    doc: pdf_extract::Document,
}

impl RichSource {
    /// Parse a document from memory.
    ///
    /// # Errors
    /// * [`Error::UnknownFormat`] / [`Error::UnsupportedVersion`] when the
    ///   header is not a usable PDF header
    /// * [`Error::Encrypted`] for password-protected documents
    /// * [`Error::BackendOpen`] when parsing fails
    pub fn open(data: &[u8]) -> Result<Self> {
        detect::detect_format_from_bytes(data)?;

        let doc = pdf_extract::Document::load_mem(data)
            .map_err(|e| Error::BackendOpen(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        Ok(Self { doc })
    }
}

impl PageTextSource for RichSource {
    fn page_numbers(&self) -> Vec<u32> {
        self.doc.get_pages().keys().copied().collect()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        let mut text = String::new();
        let mut output = PlainTextOutput::new(&mut text);
        output_doc_page(&self.doc, &mut output, page).map_err(|e| Error::PageExtract {
            page,
            reason: format!("{:?}", e),
        })?;
        Ok(text)
    }

    fn page_glyphs(&self, page: u32) -> Result<Option<Vec<Glyph>>> {
        let mut collector = GlyphCollector::default();
        output_doc_page(&self.doc, &mut collector, page).map_err(|e| Error::PageExtract {
            page,
            reason: format!("{:?}", e),
        })?;
        Ok(Some(collector.glyphs))
    }

    fn metadata_title(&self) -> Option<String> {
        // The rich path infers the title from first-page layout instead.
        None
    }
}

/// Records one [`Glyph`] per rendered character, ignoring geometry.
#[derive(Default)]
struct GlyphCollector {
    glyphs: Vec<Glyph>,
}

impl OutputDev for GlyphCollector {
    fn begin_page(
        &mut self,
        _page_num: u32,
        _media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> std::result::Result<(), OutputError> {
        Ok(())
    }

    fn end_page(&mut self) -> std::result::Result<(), OutputError> {
        Ok(())
    }

    fn output_character(
        &mut self,
        _trm: &Transform,
        _width: f64,
        _spacing: f64,
        font_size: f64,
        ch: &str,
    ) -> std::result::Result<(), OutputError> {
        // Whitespace carries the surrounding run's size and would only
        // inflate bucket counts.
        if !ch.trim().is_empty() && font_size.is_finite() && font_size > 0.0 {
            self.glyphs.push(Glyph {
                size: font_size as f32,
            });
        }
        Ok(())
    }

    fn begin_word(&mut self) -> std::result::Result<(), OutputError> {
        Ok(())
    }

    fn end_word(&mut self) -> std::result::Result<(), OutputError> {
        Ok(())
    }

    fn end_line(&mut self) -> std::result::Result<(), OutputError> {
        Ok(())
    }
}
