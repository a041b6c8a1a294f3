//! Extraction orchestration: backend selection, fallback, and assembly.
//!
//! Two nested decision points. At document open, the rich backend is
//! tried first and the whole document drops to the plain backend if it
//! fails. On the rich path, a single page's extraction failure drops
//! only that page to the reduced cascade; later pages continue rich.
//! Every failure is recovered here: callers always get a [`Document`].

mod options;

pub use options::ExtractOptions;
use options::Deadline;

use crate::model::{Document, HeadingEntry};
use crate::outline::{self, FontSizeHistogram};
use crate::source::{PageTextSource, PlainSource, RichSource};
use std::fs;
use std::path::Path;

/// Top-level extraction driver.
#[derive(Debug, Clone, Default)]
pub struct ExtractionPipeline {
    options: ExtractOptions,
}

impl ExtractionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract from a file on disk. Read failures become a total-failure
    /// [`Document`], same as unparseable bytes.
    pub fn extract_path<P: AsRef<Path>>(&self, path: P) -> Document {
        match fs::read(&path) {
            Ok(data) => self.extract_bytes(&data),
            Err(e) => {
                log::error!("failed to read {}: {}", path.as_ref().display(), e);
                Document::total_failure(format!("failed to read input file: {}", e))
            }
        }
    }

    /// Extract from in-memory bytes. Never fails; degraded and failed
    /// runs are reported through the document's `error` field.
    pub fn extract_bytes(&self, data: &[u8]) -> Document {
        let rich_err = match RichSource::open(data) {
            Ok(source) => return self.run_rich(&source),
            Err(e) => {
                log::warn!("rich backend failed to open document: {}", e);
                e
            }
        };
        self.plain_fallback(data, rich_err)
    }

    /// Whole-document fallback after a rich-backend open failure.
    fn plain_fallback(&self, data: &[u8], rich_err: crate::error::Error) -> Document {
        match PlainSource::open(data) {
            Ok(source) => self.run_plain(&source),
            Err(plain_err) => {
                log::error!("plain backend also failed: {}", plain_err);
                Document::total_failure(format!(
                    "no backend could open the document (rich: {}; plain: {})",
                    rich_err, plain_err
                ))
            }
        }
    }

    /// Rich path: scanned title, primary cascade with font statistics,
    /// per-page reduced fallback.
    fn run_rich<S: PageTextSource>(&self, source: &S) -> Document {
        let deadline = Deadline::start(&self.options);
        let pages = source.page_numbers();

        let title = match pages.first() {
            Some(&first) => match source.page_text(first) {
                Ok(text) => outline::detect_title(&text),
                Err(e) => {
                    log::warn!("could not read first page for title: {}", e);
                    String::new()
                }
            },
            None => String::new(),
        };

        let mut assembler = OutlineAssembler::new();
        let mut error = None;

        for &page in &pages {
            if deadline.expired() {
                error = Some(format!(
                    "time budget exceeded before page {}; outline truncated",
                    page
                ));
                break;
            }

            match rich_page_headings(source, page) {
                Ok(headings) => assembler.push_page(headings),
                Err(e) => {
                    log::warn!("rich extraction failed on page {}: {}", page, e);
                    match reduced_page_headings(source, page) {
                        Ok(headings) => assembler.push_page(headings),
                        Err(e) => {
                            log::warn!("page {} skipped entirely: {}", page, e);
                        }
                    }
                }
            }
        }

        Document {
            title,
            outline: assembler.finish(),
            error,
        }
    }

    /// Plain path: metadata title preferred over a scanned line, reduced
    /// cascade for every page.
    fn run_plain(&self, source: &PlainSource) -> Document {
        let deadline = Deadline::start(&self.options);
        let pages = source.page_numbers();

        let title = source
            .metadata_title()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| match pages.first() {
                Some(&first) => match source.page_text(first) {
                    Ok(text) => outline::detect_title(&text),
                    Err(e) => {
                        log::warn!("could not read first page for title: {}", e);
                        String::new()
                    }
                },
                None => String::new(),
            });

        let mut assembler = OutlineAssembler::new();
        let mut error = None;

        for &page in &pages {
            if deadline.expired() {
                error = Some(format!(
                    "time budget exceeded before page {}; outline truncated",
                    page
                ));
                break;
            }

            match reduced_page_headings(source, page) {
                Ok(headings) => assembler.push_page(headings),
                Err(e) => {
                    log::warn!("page {} skipped: {}", page, e);
                }
            }
        }

        Document {
            title,
            outline: assembler.finish(),
            error,
        }
    }
}

/// Classify one page's lines with the primary cascade and font
/// statistics when the backend reports glyphs.
fn rich_page_headings<S: PageTextSource>(
    source: &S,
    page: u32,
) -> crate::error::Result<Vec<HeadingEntry>> {
    let text = source.page_text(page)?;
    let histogram = source
        .page_glyphs(page)?
        .map(|glyphs| FontSizeHistogram::from_glyphs(&glyphs));

    let mut headings = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(level) = outline::classify(line, histogram.as_ref()) {
            headings.push(HeadingEntry::new(level, line, page));
        }
    }
    Ok(headings)
}

/// Classify one page's lines with the reduced cascade.
fn reduced_page_headings<S: PageTextSource>(
    source: &S,
    page: u32,
) -> crate::error::Result<Vec<HeadingEntry>> {
    let text = source.page_text(page)?;

    let mut headings = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(level) = outline::classify_reduced(line) {
            headings.push(HeadingEntry::new(level, line, page));
        }
    }
    Ok(headings)
}

/// Accumulates per-page heading lists in scan order. No deduplication
/// and no re-sorting; the outline order is page ascending, then line
/// order within each page.
struct OutlineAssembler {
    entries: Vec<HeadingEntry>,
}

impl OutlineAssembler {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn push_page(&mut self, headings: Vec<HeadingEntry>) {
        self.entries.extend(headings);
    }

    fn finish(self) -> Vec<HeadingEntry> {
        self.entries
    }
}
