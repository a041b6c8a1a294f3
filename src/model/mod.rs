//! Document model: the extracted title and heading outline.

mod document;

pub use document::{Document, HeadingEntry, HeadingLevel};
