//! Extraction result types.
//!
//! A [`Document`] is always produced, even for unreadable input: failures
//! are reported through the `error` field rather than an `Err` at the
//! public API boundary.

use serde::{Deserialize, Serialize};

/// Title used when nothing at all could be recovered from the input.
pub(crate) const ERROR_TITLE: &str = "Error extracting title";

/// Heading depth in the inferred outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inferred heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingEntry {
    pub level: HeadingLevel,
    pub text: String,
    /// 1-based page number the heading line was found on.
    pub page: u32,
}

impl HeadingEntry {
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Extraction result: a title, the heading outline, and an optional
/// error description when extraction was degraded or failed outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub outline: Vec<HeadingEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Document {
    /// Empty result with no title, no outline, and no error.
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            outline: Vec::new(),
            error: None,
        }
    }

    /// Result shape for input that could not be read by any backend.
    pub fn total_failure(reason: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            outline: Vec::new(),
            error: Some(reason.into()),
        }
    }

    /// True when extraction produced neither a title nor any headings.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
