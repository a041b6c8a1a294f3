//! Outline inference: title detection and the heading rule cascade.

mod classify;
mod histogram;
mod title;

pub use classify::{classify, classify_reduced};
pub use histogram::FontSizeHistogram;
pub use title::detect_title;
